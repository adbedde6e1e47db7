use serde::{Deserialize, Deserializer};

use crate::models::Paging;

/// Raw query string parameters in request order.
///
/// A repeated key never fails extraction; lookups see its first value.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(String, String)>::deserialize(deserializer)?;
        Ok(QueryParams { pairs })
    }
}

impl QueryParams {
    /// First value given for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Paging from `page` and `size`, with defaults for anything unusable
    pub fn paging(&self) -> Paging {
        Paging::parse(self.get("page"), self.get("size"))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let params: QueryParams = [("page", "1"), ("q", "heat"), ("page", "2")]
            .into_iter()
            .collect();
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("q"), Some("heat"));
        assert_eq!(params.get("size"), None);
        assert_eq!(params.paging(), Paging::new(1, 100));
    }

    #[test]
    fn test_paging_falls_back_per_field() {
        let params: QueryParams = [("page", "x"), ("size", "20"), ("size", "oops")]
            .into_iter()
            .collect();
        assert_eq!(params.paging(), Paging::new(1, 20));
        assert_eq!(QueryParams::default().paging(), Paging::default());
    }
}
