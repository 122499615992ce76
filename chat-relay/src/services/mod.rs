pub mod metrics;
pub mod provider_handle;
pub mod providers;

pub use provider_handle::ProviderHandle;
