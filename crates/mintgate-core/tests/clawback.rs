use mintgate_core::{PrincipalId, RestrictedToken, Role, TokenError, TransferRestriction};

fn alice() -> PrincipalId {
    PrincipalId::new("alice")
}

fn bob() -> PrincipalId {
    PrincipalId::new("bob")
}

fn carol() -> PrincipalId {
    PrincipalId::new("carol")
}

/// Token with `alice` as admin, holding minter and revoker.
fn revocable_token() -> RestrictedToken {
    let token = RestrictedToken::new();
    token
        .initialize("Mintgate Token", "MGT", 8, &alice(), &alice())
        .expect("token should initialize");
    token
        .grant_role(Role::Minter, &alice(), &alice())
        .expect("grant minter should succeed");
    token
        .grant_role(Role::Revoker, &alice(), &alice())
        .expect("grant revoker should succeed");
    token
}

#[test]
fn revoking_requires_role_and_funds() {
    let token = RestrictedToken::new();
    token
        .initialize("Mintgate Token", "MGT", 8, &alice(), &alice())
        .expect("token should initialize");
    token
        .grant_role(Role::Minter, &alice(), &alice())
        .expect("grant minter should succeed");
    token
        .mint(100, &alice(), &alice())
        .expect("mint should succeed");

    assert_eq!(token.total_supply().unwrap(), 100);
    assert_eq!(token.balance_of(&alice()).unwrap(), 100);

    // Without the revoker role the clawback is refused and nothing moves.
    assert_eq!(
        token.revoke(100, &alice(), &bob(), &alice()),
        Err(TokenError::unauthorized(Role::Revoker, &alice()))
    );
    assert_eq!(token.balance_of(&alice()).unwrap(), 100);

    token
        .grant_role(Role::Revoker, &alice(), &alice())
        .expect("grant revoker should succeed");
    token
        .revoke(100, &alice(), &bob(), &alice())
        .expect("revoke should succeed");

    // Clawback redirects; it does not burn.
    assert_eq!(token.total_supply().unwrap(), 100);
    assert_eq!(token.balance_of(&alice()).unwrap(), 0);
    assert_eq!(token.balance_of(&bob()).unwrap(), 100);

    // The drained account cannot cover a second clawback.
    assert_eq!(
        token.revoke(100, &alice(), &bob(), &alice()),
        Err(TokenError::InsufficientBalance { have: 0, need: 100 })
    );
}

#[test]
fn revocation_cycle_restores_starting_balances() {
    let token = revocable_token();
    for account in [alice(), bob(), carol()] {
        token
            .mint(100, &account, &alice())
            .expect("mint should succeed");
    }
    assert_eq!(token.total_supply().unwrap(), 300);

    // A full cycle of clawbacks lands every balance where it started.
    token.revoke(20, &alice(), &bob(), &alice()).unwrap();
    token.revoke(20, &bob(), &carol(), &alice()).unwrap();
    token.revoke(20, &carol(), &alice(), &alice()).unwrap();

    assert_eq!(token.total_supply().unwrap(), 300);
    assert_eq!(token.balance_of(&alice()).unwrap(), 100);
    assert_eq!(token.balance_of(&bob()).unwrap(), 100);
    assert_eq!(token.balance_of(&carol()).unwrap(), 100);
    token.verify_conservation().unwrap();
}

#[test]
fn repeated_revokes_against_one_account_accumulate() {
    let token = revocable_token();
    for account in [alice(), bob(), carol()] {
        token
            .mint(100, &account, &alice())
            .expect("mint should succeed");
    }

    for _ in 0..3 {
        token.revoke(20, &bob(), &carol(), &alice()).unwrap();
        token.verify_conservation().unwrap();
    }

    assert_eq!(token.total_supply().unwrap(), 300);
    assert_eq!(token.balance_of(&alice()).unwrap(), 100);
    assert_eq!(token.balance_of(&bob()).unwrap(), 40);
    assert_eq!(token.balance_of(&carol()).unwrap(), 160);
}

#[test]
fn clawback_reaches_blacklisted_accounts() {
    let token = revocable_token();
    token
        .grant_role(Role::Blacklister, &alice(), &alice())
        .expect("grant blacklister should succeed");
    token
        .mint(100, &bob(), &alice())
        .expect("mint should succeed");

    token
        .set_blacklisted(&bob(), true, &alice())
        .expect("blacklisting should succeed");

    // The frozen account cannot transfer on its own...
    assert_eq!(
        token.transfer(10, &bob(), &carol(), &bob()),
        Err(TokenError::TransferRestricted(TransferRestriction::Blacklist))
    );

    // ...but administrative recovery still works against it.
    token
        .revoke(100, &bob(), &carol(), &alice())
        .expect("clawback should reach the frozen account");

    assert_eq!(token.balance_of(&bob()).unwrap(), 0);
    assert_eq!(token.balance_of(&carol()).unwrap(), 100);
    assert_eq!(token.total_supply().unwrap(), 100);
}
