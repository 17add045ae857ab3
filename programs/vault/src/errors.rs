use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    /***********************************|
    |              Registry             |
    |__________________________________*/
    #[msg(VAULT_REGISTRY_ALREADY_INITIALIZED)]
    VaultAlreadyInitialized,

    #[msg(VAULT_REGISTRY_ONLY_AUTHORITY)]
    VaultOnlyAuthority,

    #[msg(VAULT_INVALID_PARAMS)]
    VaultInvalidParams,

    /***********************************|
    |             Lifecycle             |
    |__________________________________*/
    #[msg(VAULT_ALREADY_EXISTS)]
    VaultAlreadyExists,

    #[msg(VAULT_UNAUTHORIZED)]
    VaultUnauthorized,

    #[msg(VAULT_FROZEN)]
    VaultFrozen,

    #[msg(VAULT_UNFROZEN)]
    VaultUnfrozen,

    #[msg(VAULT_CLOSED)]
    VaultClosed,

    /***********************************|
    |             Accounting            |
    |__________________________________*/
    #[msg(VAULT_INVALID_AMOUNT)]
    VaultInvalidAmount,

    #[msg(VAULT_INSUFFICIENT_FUNDS)]
    VaultInsufficientFunds,

    #[msg(VAULT_INSUFFICIENT_SHARES)]
    VaultInsufficientShares,

    #[msg(VAULT_DEPOSIT_CAP_EXCEEDED)]
    VaultDepositCapExceeded,

    #[msg(VAULT_COLLATERAL_MISMATCH)]
    VaultCollateralMismatch,

    #[msg(VAULT_TRANSFER_AMOUNT_MISMATCH)]
    VaultTransferAmountMismatch,

    #[msg(VAULT_RESOLUTION_FAILED)]
    VaultResolutionFailed,
}
