// File: crates/chart-core/src/renderer/attributes.rs
// Summary: Three-level attribute lookup (item override, series override, renderer default).

use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct SeriesAttribute<T> {
    items: HashMap<(usize, usize), T>,
    series: HashMap<usize, T>,
    default: T,
}

impl<T: Clone> SeriesAttribute<T> {
    pub fn new(default: T) -> Self {
        Self { items: HashMap::new(), series: HashMap::new(), default }
    }

    pub fn item(&self, series: usize, item: usize) -> Option<&T> {
        self.items.get(&(series, item))
    }

    pub fn series(&self, series: usize) -> Option<&T> {
        self.series.get(&series)
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn set_item(&mut self, series: usize, item: usize, value: Option<T>) {
        match value {
            Some(v) => {
                self.items.insert((series, item), v);
            }
            None => {
                self.items.remove(&(series, item));
            }
        }
    }

    pub fn set_series(&mut self, series: usize, value: Option<T>) {
        match value {
            Some(v) => {
                self.series.insert(series, v);
            }
            None => {
                self.series.remove(&series);
            }
        }
    }

    pub fn set_default(&mut self, value: T) {
        self.default = value;
    }

    /// Series-level value: series override, then `fallback`, then the default.
    pub fn resolve_series(&self, series: usize, fallback: impl FnOnce() -> Option<T>) -> T {
        self.series
            .get(&series)
            .cloned()
            .or_else(fallback)
            .unwrap_or_else(|| self.default.clone())
    }

    /// Item-level value: item override first, then as [`Self::resolve_series`].
    pub fn resolve(&self, series: usize, item: usize, fallback: impl FnOnce() -> Option<T>) -> T {
        match self.items.get(&(series, item)) {
            Some(v) => v.clone(),
            None => self.resolve_series(series, fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_beats_series_beats_default() {
        let mut a = SeriesAttribute::new(1);
        a.set_series(0, Some(2));
        a.set_item(0, 3, Some(3));
        assert_eq!(a.resolve(0, 3, || None), 3);
        assert_eq!(a.resolve(0, 4, || None), 2);
        assert_eq!(a.resolve(1, 0, || None), 1);
        assert_eq!(a.resolve(1, 0, || Some(9)), 9);
        a.set_series(0, None);
        assert_eq!(a.resolve(0, 4, || None), 1);
    }
}
