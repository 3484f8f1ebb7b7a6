//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Query every registered provider concurrently
    FetchProviders,
}
