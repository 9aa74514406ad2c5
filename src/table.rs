use std::ops::Index;
use std::thread;

use num_traits::{zero, Bounded, NumCast, Zero};

use super::{
    color::*,
    error::*,
    params::*
};

/// An owned sequence of cubehelix samples, index `i` taken at position
/// `i / (len - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    samples: Vec<Sample>,
}

// A single-sample table sits at the black end.
fn position(i: usize, length: usize) -> f64 {
    if length == 1 {
        0.0
    } else {
        i as f64 / (length - 1) as f64
    }
}

fn alloc<T>(len: usize) -> Result<Vec<T>, TableError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| TableError::ResourceExhausted)?;
    Ok(buf)
}

// `S::MAX as f64` rounds past `S::MAX` for 64-bit types, so the top of the
// range is pinned explicitly.
fn scale<S: Bounded + NumCast + Zero>(val: f64) -> S {
    if val >= 1.0 {
        return S::max_value();
    }
    S::max_value()
        .to_f64()
        .and_then(|max| S::from(max * val))
        .unwrap_or_else(zero)
}

impl Table {
    pub fn sample(length: usize, params: Params) -> Result<Table, TableError> {
        if length == 0 {
            return Err(TableError::InvalidLength);
        }

        log::debug!("sampling {} colors with {:?}", length, params);

        let mut samples = alloc(length)?;
        samples.extend((0 .. length).map(|i| params.eval(position(i, length))));

        Ok(Table { samples })
    }

    /// Same as [`Table::sample`], with the index range split across
    /// `threads` scoped worker threads.
    pub fn sample_threaded(length: usize, params: Params, threads: usize) -> Result<Table, TableError> {
        if length == 0 {
            return Err(TableError::InvalidLength);
        }
        if threads == 0 {
            return Err(TableError::InvalidThreads);
        }
        if threads == 1 {
            return Table::sample(length, params);
        }

        let threads = threads.min(length);
        let chunk = length.div_ceil(threads);

        log::debug!("sampling {} colors with {:?} on {} threads", length, params, threads);

        let mut samples = alloc(length)?;
        samples.resize(length, Sample::default());

        thread::scope(|s| {
            for (n, slice) in samples.chunks_mut(chunk).enumerate() {
                s.spawn(move || {
                    let offset = n * chunk;
                    log::trace!("worker {} filling {}..{}", n, offset, offset + slice.len());
                    for (j, sample) in slice.iter_mut().enumerate() {
                        *sample = params.eval(position(offset + j, length));
                    }
                });
            }
        });

        Ok(Table { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Flat `[R, G, B, R, G, B, ...]` channels scaled to the full range of
    /// `S`, truncating toward zero. Non-finite channels become zero.
    pub fn quantize<S: Bounded + NumCast + Zero>(&self) -> Result<Vec<S>, TableError> {
        let len = self.samples.len()
            .checked_mul(3)
            .ok_or(TableError::ResourceExhausted)?;
        let mut channels = alloc(len)?;
        channels.extend(self.samples.iter().flat_map(|s| s.map(scale::<S>)));
        Ok(channels)
    }

    pub fn to_rgb8(&self) -> Result<Vec<u8>, TableError> {
        self.quantize()
    }
}

/// Sample `length` colors and quantize them straight to 8-bit RGB.
pub fn rgb8(length: usize, params: Params) -> Result<Vec<u8>, TableError> {
    Table::sample(length, params)?.to_rgb8()
}

impl Index<usize> for Table {
    type Output = Sample;

    fn index(&self, i: usize) -> &Sample {
        &self.samples[i]
    }
}

impl From<Table> for Vec<Sample> {
    fn from(table: Table) -> Vec<Sample> {
        table.samples
    }
}
