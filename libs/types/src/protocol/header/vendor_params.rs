//! Vendor-Specific Parameters
//!
//! Open-ended, implementation-defined `name=value` extensions. Stored as an
//! ordered sequence rather than a map: names may repeat and insertion order
//! is what gets emitted.

/// One vendor parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VendorParam {
    pub name: String,
    pub value: String,
}

impl VendorParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered, unbounded list of vendor parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VendorParamList {
    params: Vec<VendorParam>,
}

impl VendorParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair at the end; never fails
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push(VendorParam::new(name, value));
    }

    /// Append every pair of `other`, keeping its order
    pub fn extend_from(&mut self, other: VendorParamList) {
        self.params.extend(other.params);
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `(name, value)` pairs in insertion order
    ///
    /// Each call starts a fresh pass over the list.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.params
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }

    /// Values of every pair named `name` (case-sensitive), in order
    pub fn values_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn as_slice(&self) -> &[VendorParam] {
        &self.params
    }
}

impl<N, V> FromIterator<(N, V)> for VendorParamList
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(n, v)| VendorParam::new(n, v))
                .collect(),
        }
    }
}
