//! Modified median-cut quantization.
//!
//! Sampled pixels are binned into a 5-bit-per-channel histogram (32768
//! cells). Starting from one box around every populated cell, boxes are
//! split at the population median of their widest axis: first by
//! population, then by population times volume, which lets large sparse
//! regions of the color cube claim a palette slot.
//!
//! Every cell also keeps the exact channel sums of its pixels, so a box
//! centroid is the true mean of its members rather than the center of the
//! cell range. A single-color image reproduces that color exactly.
//!
//! The whole procedure is deterministic: boxes live in a `Vec`, and every
//! selection breaks ties on box coordinates.

use crate::color::Rgb;

/// Significant bits kept per channel.
const SIGBITS: u32 = 5;
const RSHIFT: u32 = 8 - SIGBITS;
const SIDE: usize = 1 << SIGBITS;

/// Share of the palette produced by population-only splitting.
const FRACT_BY_POPULATION: f64 = 0.75;

#[inline]
fn cell_index(r: usize, g: usize, b: usize) -> usize {
    (r << (2 * SIGBITS)) | (g << SIGBITS) | b
}

/// Population and channel sums per histogram cell.
pub(crate) struct Histogram {
    counts: Vec<u32>,
    sums: Vec<[u64; 3]>,
    total: u64,
}

impl Histogram {
    pub(crate) fn from_samples(samples: impl Iterator<Item = Rgb>) -> Self {
        let mut counts = vec![0u32; SIDE * SIDE * SIDE];
        let mut sums = vec![[0u64; 3]; SIDE * SIDE * SIDE];
        let mut total = 0u64;

        for color in samples {
            let index = cell_index(
                (color.r >> RSHIFT) as usize,
                (color.g >> RSHIFT) as usize,
                (color.b >> RSHIFT) as usize,
            );
            counts[index] += 1;
            sums[index][0] += color.r as u64;
            sums[index][1] += color.g as u64;
            sums[index][2] += color.b as u64;
            total += 1;
        }

        Self {
            counts,
            sums,
            total,
        }
    }

    /// Number of pixels binned.
    #[inline]
    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    fn count_at(&self, cell: [usize; 3]) -> u32 {
        self.counts[cell_index(cell[0], cell[1], cell[2])]
    }
}

/// Axis-aligned box of histogram cells, bounds inclusive.
///
/// Boxes are always fitted: the `lo` and `hi` planes on every axis hold at
/// least one populated cell.
#[derive(Debug, Clone)]
struct VBox {
    lo: [usize; 3],
    hi: [usize; 3],
    count: u64,
    sum: [u64; 3],
}

impl VBox {
    /// Shrink the region `lo..=hi` to its populated cells.
    ///
    /// Returns `None` when the region holds no pixels.
    fn fitted(histogram: &Histogram, lo: [usize; 3], hi: [usize; 3]) -> Option<Self> {
        let mut min = [usize::MAX; 3];
        let mut max = [0usize; 3];
        let mut count = 0u64;
        let mut sum = [0u64; 3];

        for r in lo[0]..=hi[0] {
            for g in lo[1]..=hi[1] {
                for b in lo[2]..=hi[2] {
                    let index = cell_index(r, g, b);
                    let n = histogram.counts[index];
                    if n == 0 {
                        continue;
                    }
                    count += n as u64;
                    for c in 0..3 {
                        sum[c] += histogram.sums[index][c];
                    }
                    let cell = [r, g, b];
                    for axis in 0..3 {
                        min[axis] = min[axis].min(cell[axis]);
                        max[axis] = max[axis].max(cell[axis]);
                    }
                }
            }
        }

        (count > 0).then_some(Self {
            lo: min,
            hi: max,
            count,
            sum,
        })
    }

    fn volume(&self) -> u64 {
        (0..3).map(|axis| (self.hi[axis] - self.lo[axis] + 1) as u64).product()
    }

    fn is_single_cell(&self) -> bool {
        self.lo == self.hi
    }

    /// Deterministic tie-breaker. Boxes are disjoint, so `lo` is unique.
    fn order_key(&self) -> [usize; 3] {
        self.lo
    }

    /// Mean of the member pixels, rounded to nearest.
    fn centroid(&self) -> Rgb {
        let half = self.count / 2;
        let channel = |c: usize| ((self.sum[c] + half) / self.count).min(255) as u8;
        Rgb::new(channel(0), channel(1), channel(2))
    }

    /// Split along the widest axis at the first plane where the cumulative
    /// population reaches half.
    fn split(&self, histogram: &Histogram) -> Option<(VBox, VBox)> {
        if self.is_single_cell() {
            return None;
        }

        let axis = (0..3)
            .max_by(|&a, &b| {
                let wa = self.hi[a] - self.lo[a];
                let wb = self.hi[b] - self.lo[b];
                // Prefer the lower axis index on equal widths
                wa.cmp(&wb).then(b.cmp(&a))
            })
            .unwrap_or(0);

        let half = self.count.div_ceil(2);
        let mut cumulative = 0u64;
        let mut cut = self.hi[axis] - 1;
        for plane in self.lo[axis]..self.hi[axis] {
            cumulative += self.plane_count(histogram, axis, plane);
            if cumulative >= half {
                cut = plane;
                break;
            }
        }

        let mut first_hi = self.hi;
        first_hi[axis] = cut;
        let mut second_lo = self.lo;
        second_lo[axis] = cut + 1;

        let first = VBox::fitted(histogram, self.lo, first_hi)?;
        let second = VBox::fitted(histogram, second_lo, self.hi)?;
        Some((first, second))
    }

    fn plane_count(&self, histogram: &Histogram, axis: usize, plane: usize) -> u64 {
        let (u, v) = match axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let mut total = 0u64;
        for i in self.lo[u]..=self.hi[u] {
            for j in self.lo[v]..=self.hi[v] {
                let mut cell = [0usize; 3];
                cell[axis] = plane;
                cell[u] = i;
                cell[v] = j;
                total += histogram.count_at(cell) as u64;
            }
        }
        total
    }
}

/// Split the highest-priority box until `target` boxes exist or nothing is
/// left to split.
fn split_until<F>(histogram: &Histogram, boxes: &mut Vec<VBox>, target: usize, priority: F)
where
    F: Fn(&VBox) -> u128,
{
    while boxes.len() < target {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, vbox)| !vbox.is_single_cell())
            .max_by(|(_, a), (_, b)| {
                priority(a)
                    .cmp(&priority(b))
                    .then_with(|| b.order_key().cmp(&a.order_key()))
            })
            .map(|(index, _)| index);

        let Some(index) = candidate else {
            break;
        };

        let vbox = boxes.remove(index);
        match vbox.split(histogram) {
            Some((first, second)) => {
                boxes.push(first);
                boxes.push(second);
            }
            None => {
                boxes.push(vbox);
                break;
            }
        }
    }
}

/// Quantize the histogram into at most `max_colors` centroids, ranked by
/// population (largest first).
pub(crate) fn quantize(histogram: &Histogram, max_colors: usize) -> Vec<Rgb> {
    let Some(root) = VBox::fitted(histogram, [0; 3], [SIDE - 1; 3]) else {
        return Vec::new();
    };

    let mut boxes = vec![root];
    let by_population = ((max_colors as f64) * FRACT_BY_POPULATION).ceil() as usize;

    split_until(histogram, &mut boxes, by_population, |vbox| vbox.count as u128);
    split_until(histogram, &mut boxes, max_colors, |vbox| {
        vbox.count as u128 * vbox.volume() as u128
    });

    boxes.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.order_key().cmp(&b.order_key()))
    });

    boxes.iter().map(VBox::centroid).collect()
}
