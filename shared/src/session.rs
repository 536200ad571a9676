//! Wallet session state machine.
//!
//! A single [`Session`] value is owned by the web application's context
//! layer and mutated only through the methods below, which preserve the
//! invariant that the active account, when set, is a member of the
//! known-account list. The session is never persisted: it is rebuilt on
//! every page load from the accounts the wallet has already authorized,
//! without prompting the user.

use alloy_primitives::Address;

/// Local view of the browser-wallet connection.
///
/// `accounts` keeps the wallet-reported order; the wallet's first entry is
/// its default account and becomes the active account whenever the list is
/// (re)established.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    active_account: Option<Address>,
    accounts: Vec<Address>,
    chain_id: Option<u64>,
    /// True while a connect request is in flight; re-entrant connects are
    /// no-ops for its duration.
    pub connecting: bool,
    /// Last connection-level failure, surfaced once in the connect UI.
    pub last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_account(&self) -> Option<Address> {
        self.active_account
    }

    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn is_connected(&self) -> bool {
        self.active_account.is_some()
    }

    /// Apply the result of a successful connect or silent reconnect.
    pub fn established(&mut self, accounts: Vec<Address>, chain_id: u64) {
        self.active_account = accounts.first().copied();
        self.accounts = accounts;
        self.chain_id = Some(chain_id);
        self.last_error = None;
    }

    /// Wallet-pushed replacement of the account list. The active account
    /// resets to the wallet's first entry; an empty list means the wallet
    /// revoked access entirely.
    pub fn accounts_changed(&mut self, accounts: Vec<Address>) {
        self.active_account = accounts.first().copied();
        self.accounts = accounts;
    }

    /// Wallet-pushed chain switch. Touches nothing but the chain id.
    pub fn chain_changed(&mut self, chain_id: u64) {
        self.chain_id = Some(chain_id);
    }

    /// Switch the active account. Returns true when the switch happened.
    ///
    /// Addresses outside the known-account list are ignored, so a stale
    /// picker entry can never point the session at an account the wallet
    /// does not hold.
    pub fn select_account(&mut self, address: Address) -> bool {
        if self.accounts.contains(&address) {
            self.active_account = Some(address);
            true
        } else {
            false
        }
    }

    /// Local view reset. Wallets expose no revoke API, so authorization
    /// survives on the wallet side; only this session forgets it.
    pub fn disconnect(&mut self) {
        self.active_account = None;
        self.accounts.clear();
        self.chain_id = None;
        self.last_error = None;
    }

    /// Record a connection-level failure without touching account state.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    #[cfg(test)]
    fn invariant_holds(&self) -> bool {
        match self.active_account {
            Some(addr) => self.accounts.contains(&addr),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn established_activates_first_account() {
        let mut session = Session::new();
        session.established(vec![addr(0xaa), addr(0xbb)], 1329);
        assert_eq!(session.active_account(), Some(addr(0xaa)));
        assert_eq!(session.accounts().len(), 2);
        assert_eq!(session.chain_id(), Some(1329));
        assert!(session.invariant_holds());
    }

    #[test]
    fn established_with_no_authorized_accounts_stays_disconnected() {
        let mut session = Session::new();
        session.established(vec![], 1);
        assert_eq!(session.active_account(), None);
        assert!(!session.is_connected());
        assert_eq!(session.chain_id(), Some(1));
    }

    #[test]
    fn select_switches_only_to_known_accounts() {
        let mut session = Session::new();
        session.established(vec![addr(0xaa), addr(0xbb)], 1329);

        assert!(session.select_account(addr(0xbb)));
        assert_eq!(session.active_account(), Some(addr(0xbb)));

        // Unknown address: silently ignored, selection keeps the prior value.
        assert!(!session.select_account(addr(0xcc)));
        assert_eq!(session.active_account(), Some(addr(0xbb)));
        assert!(session.invariant_holds());
    }

    #[test]
    fn disconnect_resets_regardless_of_prior_state() {
        let mut session = Session::new();
        session.established(vec![addr(0x11), addr(0x22), addr(0x33)], 56);
        session.select_account(addr(0x33));
        session.fail("stale failure");

        session.disconnect();
        assert_eq!(session.active_account(), None);
        assert!(session.accounts().is_empty());
        assert_eq!(session.chain_id(), None);
        assert_eq!(session.last_error, None);
    }

    #[test]
    fn accounts_changed_replaces_list_and_resets_active() {
        let mut session = Session::new();
        session.established(vec![addr(0xaa), addr(0xbb)], 1329);
        session.select_account(addr(0xbb));

        session.accounts_changed(vec![addr(0xdd)]);
        assert_eq!(session.active_account(), Some(addr(0xdd)));
        assert_eq!(session.accounts(), &[addr(0xdd)]);

        session.accounts_changed(vec![]);
        assert_eq!(session.active_account(), None);
        assert!(session.invariant_holds());
    }

    #[test]
    fn chain_changed_touches_only_the_chain() {
        let mut session = Session::new();
        session.established(vec![addr(0xaa)], 1);
        session.chain_changed(1329);
        assert_eq!(session.chain_id(), Some(1329));
        assert_eq!(session.active_account(), Some(addr(0xaa)));
    }

    #[test]
    fn fail_keeps_account_state() {
        let mut session = Session::new();
        session.established(vec![addr(0xaa)], 1329);
        session.fail("user rejected the request");
        assert_eq!(session.last_error.as_deref(), Some("user rejected the request"));
        assert_eq!(session.active_account(), Some(addr(0xaa)));
    }
}
