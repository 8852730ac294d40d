//! Remote fetch layer
//!
//! One HTTP GET per call against a platform's tree or raw-file API. The tree is
//! required; manifests are best-effort and never fail a request.

pub mod fetcher;
pub mod manifest;
pub mod mock;
pub mod transport;

pub use fetcher::{FetchError, ManifestSignal, RemoteFetcher};
pub use manifest::{parse_requirements, PackageManifest};
pub use mock::{MockTransport, RecordedRequest};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
