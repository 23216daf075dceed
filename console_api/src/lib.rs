mod client;
mod descriptor;
mod errors;
mod interceptor;
pub mod types;
pub use self::client::{Client, ClientBuilder, API_PREFIX, DEFAULT_TIMEOUT};
pub use self::descriptor::{Method, RequestDescriptor, ResponseDescriptor};
pub use self::errors::{Error, FailureCode, RequestError};
pub use self::interceptor::{ErrorFlow, Interceptor, InterceptorChain};
