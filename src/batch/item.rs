/// An item paired with the key of the row it was loaded from, so that a later
/// stage can flag that row as processed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessIndicatorItem<K, T> {
    pub key: K,
    pub item: Option<T>,
}

impl<K, T> ProcessIndicatorItem<K, T> {
    pub fn new(key: K, item: Option<T>) -> Self {
        Self { key, item }
    }

    pub fn into_parts(self) -> (K, Option<T>) {
        (self.key, self.item)
    }
}
