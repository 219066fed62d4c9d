//! Delivery of native value between contracts.
//!
//! Token transfers on Soroban never call into the recipient, so a contract has no way to refuse
//! value pushed to it. Unsolicited native value is therefore sent in two steps within the same
//! invocation: the sender transfers the amount on the native asset contract, then, if the
//! recipient is a contract, invokes `receive(from, amount)` on it. A contract accepts the value
//! only if `receive` succeeds. Contracts without a `receive` entry point, or whose `receive`
//! fails in any way, refuse it. Accounts accept it as a plain transfer.
//!
//! [`send`] does not undo the transfer when the recipient refuses it. The error must be
//! propagated out of the calling contract so that the host rolls the invocation back.

use soroban_sdk::{
    contracterror, symbol_short, token::TokenClient, vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

pub const RECEIVE_FN: Symbol = symbol_short!("receive");

/// Length of a `G...` account or `C...` contract strkey.
const STRKEY_LEN: usize = 56;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum NativeTransferError {
    /// The native asset contract refused the transfer.
    Undeliverable = 1,
    /// The recipient contract has no `receive` entry point or its `receive` failed.
    Rejected = 2,
}

/// Sends `amount` of the `native` asset from the current contract to `to` and, if `to` is a
/// contract, notifies it.
pub fn send(
    env: &Env,
    native: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), NativeTransferError> {
    if amount == 0 {
        return Ok(());
    }

    let from = env.current_contract_address();

    match TokenClient::new(env, native).try_transfer(&from, to, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(NativeTransferError::Undeliverable),
    }

    if !is_contract(to) {
        return Ok(());
    }

    notify(env, &from, to, amount)
}

/// Returns true if `address` is a contract address rather than an account.
pub fn is_contract(address: &Address) -> bool {
    let strkey = address.to_string();

    if strkey.len() as usize != STRKEY_LEN {
        return false;
    }

    let mut buf = [0u8; STRKEY_LEN];
    strkey.copy_into_slice(&mut buf);

    buf[0] == b'C'
}

fn notify(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), NativeTransferError> {
    let args: Vec<Val> = vec![env, from.to_val(), amount.into_val(env)];

    // the host reports a missing entry point, a panic and a contract error alike
    env.try_invoke_contract::<Val, NativeTransferError>(to, &RECEIVE_FN, args)
        .map(|_| ())
        .map_err(|_| NativeTransferError::Rejected)
}

#[cfg(test)]
mod test {
    #![allow(clippy::redundant_pub_crate)] // contract macro generates pub types

    use super::{is_contract, send, NativeTransferError};
    use crate::assert_err;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::token::{StellarAssetClient, TokenClient};
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    enum DataKey {
        LastReceived,
    }

    #[contract]
    struct Sender;

    mod acceptor {
        use super::DataKey;
        use soroban_sdk::{contract, contractimpl, Address, Env};

        #[contract]
        pub struct Acceptor;

        #[contractimpl]
        impl Acceptor {
            pub fn receive(env: Env, from: Address, amount: i128) {
                env.storage()
                    .instance()
                    .set(&DataKey::LastReceived, &(from, amount));
            }
        }
    }

    mod refuser {
        use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

        #[contracterror]
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        #[repr(u32)]
        pub enum RefuserError {
            NotPayable = 1,
        }

        #[contract]
        pub struct Refuser;

        #[contractimpl]
        impl Refuser {
            pub fn receive(_env: Env, _from: Address, _amount: i128) -> Result<(), RefuserError> {
                Err(RefuserError::NotPayable)
            }
        }
    }

    mod panicking {
        use soroban_sdk::{contract, contractimpl, Address, Env};

        #[contract]
        pub struct PanickingReceiver;

        #[contractimpl]
        impl PanickingReceiver {
            pub fn receive(_env: Env, _from: Address, _amount: i128) {
                panic!("not payable");
            }
        }
    }

    #[contract]
    struct NoReceive;

    #[contractimpl]
    impl NoReceive {
        pub fn ping(_env: Env) {}
    }

    use acceptor::Acceptor;
    use panicking::PanickingReceiver;
    use refuser::Refuser;

    struct Setup<'a> {
        env: Env,
        sender: Address,
        native: TokenClient<'a>,
        issuer: Address,
    }

    fn setup<'a>(balance: i128) -> Setup<'a> {
        let env = Env::default();
        env.mock_all_auths();

        let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
        let sender = env.register(Sender, ());
        StellarAssetClient::new(&env, &asset.address()).mint(&sender, &balance);

        let native = TokenClient::new(&env, &asset.address());
        let issuer = asset.issuer().address();

        Setup {
            env,
            sender,
            native,
            issuer,
        }
    }

    #[test]
    fn contract_and_account_addresses() {
        let Setup {
            env,
            sender,
            issuer,
            ..
        } = setup(0);

        assert!(is_contract(&sender));
        assert!(is_contract(&Address::generate(&env)));
        assert!(!is_contract(&issuer));
    }

    #[test]
    fn send_to_account_is_a_plain_transfer() {
        let Setup {
            env,
            sender,
            native,
            issuer,
        } = setup(100);

        // the issuer account takes native value back without a trustline
        env.as_contract(&sender, || send(&env, &native.address, &issuer, 40))
            .unwrap();

        assert_eq!(native.balance(&sender), 60);
    }

    #[test]
    fn send_notifies_receiver() {
        let Setup {
            env,
            sender,
            native,
            ..
        } = setup(100);
        let recipient = env.register(Acceptor, ());

        env.as_contract(&sender, || send(&env, &native.address, &recipient, 25))
            .unwrap();

        assert_eq!(native.balance(&recipient), 25);
        env.as_contract(&recipient, || {
            let last: (Address, i128) = env
                .storage()
                .instance()
                .get(&DataKey::LastReceived)
                .unwrap();
            assert_eq!(last, (sender.clone(), 25));
        });
    }

    #[test]
    fn send_rejected_by_receiver() {
        let Setup {
            env,
            sender,
            native,
            ..
        } = setup(100);
        let recipient = env.register(Refuser, ());

        assert_err!(
            env.as_contract(&sender, || send(&env, &native.address, &recipient, 25)),
            NativeTransferError::Rejected
        );
    }

    #[test]
    fn send_rejected_by_panicking_receiver() {
        let Setup {
            env,
            sender,
            native,
            ..
        } = setup(100);
        let recipient = env.register(PanickingReceiver, ());

        assert_err!(
            env.as_contract(&sender, || send(&env, &native.address, &recipient, 25)),
            NativeTransferError::Rejected
        );
    }

    #[test]
    fn send_rejected_by_contract_without_receive() {
        let Setup {
            env,
            sender,
            native,
            ..
        } = setup(100);
        let recipient = env.register(NoReceive, ());

        assert_err!(
            env.as_contract(&sender, || send(&env, &native.address, &recipient, 25)),
            NativeTransferError::Rejected
        );
    }

    #[test]
    fn send_more_than_balance() {
        let Setup {
            env,
            sender,
            native,
            ..
        } = setup(10);
        let recipient = env.register(Acceptor, ());

        assert_err!(
            env.as_contract(&sender, || send(&env, &native.address, &recipient, 11)),
            NativeTransferError::Undeliverable
        );
        assert_eq!(native.balance(&sender), 10);
    }

    #[test]
    fn send_zero_is_noop() {
        let Setup {
            env,
            sender,
            native,
            ..
        } = setup(0);
        let recipient = env.register(Refuser, ());

        env.as_contract(&sender, || send(&env, &native.address, &recipient, 0))
            .unwrap();

        assert_eq!(native.balance(&recipient), 0);
    }
}
