use advanced_wrapped_native::SpendTargetInterface;
use custody_soroban_std::native::{self, NativeTransferError};
use soroban_sdk::token::TokenClient;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Bytes, Env,
};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Bounds,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TargetError {
    AmountOutOfBounds = 101,
    InvalidPayload = 102,
}

/// Draws the amount encoded in the payload, as long as it lies within the configured bounds.
/// Has no `receive` entry point, so it can't be sent native value.
#[contract]
pub struct TargetContract;

#[contractimpl]
impl TargetContract {
    pub fn update(env: Env, min: i128, max: i128) {
        env.storage().instance().set(&DataKey::Bounds, &(min, max));
    }
}

#[contractimpl]
impl SpendTargetInterface for TargetContract {
    fn on_authorized(env: Env, from: Address, token: Address, _budget: i128, payload: Bytes) {
        let amount = i128::from_xdr(&env, &payload)
            .unwrap_or_else(|_| panic_with_error!(&env, TargetError::InvalidPayload));

        let (min, max): (i128, i128) = env
            .storage()
            .instance()
            .get(&DataKey::Bounds)
            .unwrap_or((0, 0));

        if amount < min || amount > max {
            panic_with_error!(&env, TargetError::AmountOutOfBounds);
        }

        let this = env.current_contract_address();
        TokenClient::new(&env, &token).transfer_from(&this, &from, &this, &amount);
    }
}

/// Payload making the target draw `amount`.
pub fn draw_payload(env: &Env, amount: i128) -> Bytes {
    amount.to_xdr(env)
}

/// Pushes native value it holds to other contracts.
#[contract]
pub struct NativeSender;

#[contractimpl]
impl NativeSender {
    pub fn send(
        env: Env,
        native: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), NativeTransferError> {
        native::send(&env, &native, &to, amount)
    }
}
