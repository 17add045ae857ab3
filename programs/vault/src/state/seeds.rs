pub const GLOBAL_REGISTRY_SEED: &[u8] = b"global_registry";
pub const VAULT_SEED: &[u8] = b"vault";
pub const SHARE_MINT_SEED: &[u8] = b"share_mint";
pub const USER_POSITION_SEED: &[u8] = b"user_position";
