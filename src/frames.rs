use std::path::{Path, PathBuf};

/// `{prefix}/{index + 1}.{extension}`, the index optionally zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePath {
    pub prefix: String,
    /// Minimum digit count of the 1-based index; 0 leaves it unpadded.
    pub padding: usize,
    pub extension: String,
}

impl FramePath {
    pub fn new(prefix: impl Into<String>, padding: usize, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            padding,
            extension: extension.into(),
        }
    }

    /// File name of the zero-based frame `index`.
    pub fn file_name(&self, index: usize) -> String {
        format!(
            "{:0width$}.{}",
            index + 1,
            self.extension,
            width = self.padding
        )
    }

    pub fn url(&self, index: usize) -> String {
        format!("{}/{}", self.prefix, self.file_name(index))
    }

    /// Where the frame lives under a static asset root on disk.
    pub fn local_path(&self, root: &Path, index: usize) -> PathBuf {
        root.join(self.prefix.trim_start_matches('/'))
            .join(self.file_name(index))
    }
}

/// Counts settled loads (success or failure) for a fixed number of frames.
///
/// `settle` reports readiness exactly once: on the call that settles the last
/// outstanding slot. Repeat settlements of a slot are ignored, so a browser
/// firing both `error` and `load` cannot advance the counter twice.
#[derive(Debug, Clone)]
pub struct LoadTracker {
    settled: Vec<bool>,
    count: usize,
}

impl LoadTracker {
    pub fn new(len: usize) -> Self {
        Self {
            settled: vec![false; len],
            count: 0,
        }
    }

    pub fn settled(&self) -> usize {
        self.count
    }

    pub fn is_ready(&self) -> bool {
        self.count == self.settled.len()
    }

    /// Mark `index` as settled. Returns `true` only when this call completed
    /// the sequence.
    pub fn settle(&mut self, index: usize) -> bool {
        match self.settled.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                self.count == self.settled.len()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_and_unpadded_urls() {
        let padded = FramePath::new("/images/frames", 2, "webp");
        assert_eq!(padded.url(0), "/images/frames/01.webp");
        assert_eq!(padded.url(59), "/images/frames/60.webp");

        let plain = FramePath::new("/images/frames", 0, "png");
        assert_eq!(plain.url(0), "/images/frames/1.png");
        assert_eq!(plain.url(39), "/images/frames/40.png");
    }

    #[test]
    fn local_path_strips_leading_slash() {
        let path = FramePath::new("/images/frames", 2, "webp");
        assert_eq!(
            path.local_path(Path::new("static"), 4),
            Path::new("static/images/frames/05.webp")
        );
    }

    #[test]
    fn ready_fires_once_in_any_order() {
        let mut tracker = LoadTracker::new(4);
        let mut fired = 0;
        for index in [3, 0, 2, 1] {
            assert!(!tracker.is_ready());
            if tracker.settle(index) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(tracker.is_ready());
        assert!(!tracker.settle(1));
    }

    #[test]
    fn duplicate_and_stray_settlements_do_not_count() {
        let mut tracker = LoadTracker::new(2);
        assert!(!tracker.settle(0));
        assert!(!tracker.settle(0));
        assert!(!tracker.settle(7));
        assert_eq!(tracker.settled(), 1);
        assert!(tracker.settle(1));
    }
}
