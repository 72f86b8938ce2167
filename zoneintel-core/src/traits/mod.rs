pub mod connectivity;

pub use connectivity::{ConnectivityProvider, NoConnectivity};
