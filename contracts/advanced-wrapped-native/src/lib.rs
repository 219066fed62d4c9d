#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;

mod interface;
mod target;

pub use target::{SpendTargetClient, SpendTargetInterface};

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{AdvancedWrappedNativeClient, AdvancedWrappedNativeInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{AdvancedWrappedNative, AdvancedWrappedNativeClient};
        pub use interface::AdvancedWrappedNativeInterface;

    }
}
