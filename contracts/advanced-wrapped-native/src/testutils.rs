#![cfg(any(test, feature = "testutils"))]
extern crate std;

use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};
use wrapped_native::{WrappedNative, WrappedNativeClient};

use crate::contract::{AdvancedWrappedNative, AdvancedWrappedNativeClient};

mod wallet {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    /// Contract account accepting any native value sent to it.
    #[contract]
    pub struct Wallet;

    #[contractimpl]
    impl Wallet {
        pub fn receive(_env: Env, _from: Address, _amount: i128) {}
    }
}

/// Registers a contract that accepts native value, to stand in for a user.
pub fn register_wallet(env: &Env) -> Address {
    env.register(wallet::Wallet, ())
}

/// Clients of a native asset, the token wrapping it and an advanced wrapped native contract on top.
pub struct TestContracts<'a> {
    pub native: TokenClient<'a>,
    pub wrapped_native: WrappedNativeClient<'a>,
    pub advanced_wrapped_native: AdvancedWrappedNativeClient<'a>,
}

pub fn setup_contracts<'a>(env: &Env) -> TestContracts<'a> {
    let asset = env.register_stellar_asset_contract_v2(Address::generate(env));

    let wrapped_native_id = env.register(
        WrappedNative,
        (
            asset.address(),
            7_u32,
            String::from_str(env, "Wrapped Lumens"),
            String::from_str(env, "wXLM"),
        ),
    );
    let advanced_wrapped_native_id = env.register(AdvancedWrappedNative, (&wrapped_native_id,));

    TestContracts {
        native: TokenClient::new(env, &asset.address()),
        wrapped_native: WrappedNativeClient::new(env, &wrapped_native_id),
        advanced_wrapped_native: AdvancedWrappedNativeClient::new(env, &advanced_wrapped_native_id),
    }
}

impl<'a> TestContracts<'a> {
    /// Token client over the wrapped native token.
    pub fn wrapped_native_token(&self, env: &Env) -> TokenClient<'a> {
        TokenClient::new(env, &self.wrapped_native.address)
    }

    /// Mints `amount` of native value to `holder`.
    pub fn fund(&self, env: &Env, holder: &Address, amount: i128) {
        StellarAssetClient::new(env, &self.native.address).mint(holder, &amount);
    }

    /// Registers a new wallet owning `amount` of wrapped native tokens and no native value.
    pub fn wrapped_holder(&self, env: &Env, amount: i128) -> Address {
        let holder = register_wallet(env);

        self.fund(env, &holder, amount);
        self.wrapped_native.deposit(&holder, &amount);

        holder
    }
}
