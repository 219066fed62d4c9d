#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;

mod interface;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{WrappedNativeClient, WrappedNativeInterface};
    } else {
        mod allowance;
        mod balance;
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{WrappedNative, WrappedNativeClient};
        pub use interface::WrappedNativeInterface;

    }
}
