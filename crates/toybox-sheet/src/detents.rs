//! Detent ratios.

use crate::error::SheetError;

/// Strictly ascending resting ratios in `[0, 1]`, at least one.
///
/// Index 0 is the closed position, the last index is fully open.
#[derive(Debug, Clone, PartialEq)]
pub struct DetentSet {
    ratios: Vec<f32>,
}

impl DetentSet {
    /// Sorts `ratios` ascending and validates them.
    pub fn new(ratios: impl IntoIterator<Item = f32>) -> Result<Self, SheetError> {
        let mut ratios: Vec<f32> = ratios.into_iter().collect();
        if ratios.is_empty() {
            return Err(SheetError::EmptyDetents);
        }
        for (index, &value) in ratios.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SheetError::DetentOutOfRange { index, value });
            }
        }
        ratios.sort_by(|a, b| a.total_cmp(b));
        if let Some(pair) = ratios.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SheetError::DuplicateDetent { value: pair[0] });
        }
        Ok(Self { ratios })
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.ratios
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.ratios.get(index).copied()
    }

    /// Ratio at `index` after clamping it into range.
    pub fn ratio(&self, index: usize) -> f32 {
        self.ratios[index.min(self.last_index())]
    }

    pub fn lowest(&self) -> f32 {
        self.ratios[0]
    }

    pub fn highest(&self) -> f32 {
        self.ratios[self.last_index()]
    }

    pub fn last_index(&self) -> usize {
        self.ratios.len() - 1
    }

    pub fn is_lowest(&self, index: usize) -> bool {
        index == 0
    }

    pub fn is_highest(&self, index: usize) -> bool {
        index == self.last_index()
    }

    /// Clamps a possibly negative or too-large index into `[0, len - 1]`.
    pub fn clamp_index(&self, index: isize) -> usize {
        let clamped = index.clamp(0, self.last_index() as isize) as usize;
        if clamped as isize != index {
            log::trace!("detent index {} clamped to {}", index, clamped);
        }
        clamped
    }

    /// The index after `index`, wrapping from the last detent to the first.
    pub fn next_cyclic(&self, index: usize) -> usize {
        (index + 1) % self.ratios.len()
    }

    /// Index of the ratio closest to `ratio`. On an exact tie the lower detent
    /// wins.
    pub fn nearest_index(&self, ratio: f32) -> usize {
        let mut closest = 0;
        let mut min_distance = (self.ratios[0] - ratio).abs();
        for (index, &candidate) in self.ratios.iter().enumerate().skip(1) {
            let distance = (candidate - ratio).abs();
            if distance < min_distance {
                min_distance = distance;
                closest = index;
            }
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_on_construction() {
        let detents = DetentSet::new([0.94, 0.4, 0.7]).expect("valid detents");
        assert_eq!(detents.as_slice(), &[0.4, 0.7, 0.94]);
        assert_eq!(detents.lowest(), 0.4);
        assert_eq!(detents.highest(), 0.94);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(DetentSet::new([]), Err(SheetError::EmptyDetents));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            DetentSet::new([0.4, 1.2]),
            Err(SheetError::DetentOutOfRange {
                index: 1,
                value: 1.2
            })
        );
        assert!(DetentSet::new([f32::NAN]).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            DetentSet::new([0.5, 0.2, 0.5]),
            Err(SheetError::DuplicateDetent { value: 0.5 })
        );
    }

    #[test]
    fn nearest_prefers_closest() {
        let detents = DetentSet::new([0.2, 0.5, 0.9]).expect("valid detents");
        assert_eq!(detents.nearest_index(0.61), 1);
        assert_eq!(detents.nearest_index(0.0), 0);
        assert_eq!(detents.nearest_index(1.0), 2);
    }

    #[test]
    fn nearest_tie_goes_to_lower_detent() {
        let detents = DetentSet::new([0.25, 0.75]).expect("valid detents");
        assert_eq!(detents.nearest_index(0.5), 0);
    }

    #[test]
    fn clamp_and_cycle() {
        let detents = DetentSet::new([0.4, 0.7, 0.94]).expect("valid detents");
        assert_eq!(detents.clamp_index(-1), 0);
        assert_eq!(detents.clamp_index(3), 2);
        assert_eq!(detents.clamp_index(1), 1);
        assert_eq!(detents.next_cyclic(0), 1);
        assert_eq!(detents.next_cyclic(2), 0);
    }

    #[test]
    fn single_detent_is_both_ends() {
        let detents = DetentSet::new([0.5]).expect("valid detents");
        assert!(detents.is_lowest(0));
        assert!(detents.is_highest(0));
        assert_eq!(detents.next_cyclic(0), 0);
        assert_eq!(detents.clamp_index(5), 0);
        assert_eq!(detents.ratio(9), 0.5);
    }
}
