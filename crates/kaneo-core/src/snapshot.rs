//! Caller-owned "current collection" with whole-value refresh.

/// The last successfully fetched value of a collection.
///
/// A refresh either replaces the value entirely or leaves it untouched;
/// it is never partially merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot<T> {
    current: Option<T>,
    generation: u64,
}

impl<T> Snapshot<T> {
    /// An empty snapshot; nothing fetched yet.
    pub fn empty() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    pub fn new(value: T) -> Self {
        Self {
            current: Some(value),
            generation: 1,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Number of successful loads so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn replace(&mut self, value: T) -> &T {
        self.generation += 1;
        self.current.insert(value)
    }

    /// Runs `fetch` and replaces the value on success.
    ///
    /// On failure the previous value is kept and the error returned.
    pub fn refresh_with<E, F>(&mut self, fetch: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = fetch()?;
        Ok(self.replace(value))
    }
}
