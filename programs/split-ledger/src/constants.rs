// PDA seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const RECIPIENTS_SEED: &[u8] = b"recipients";

// Recipient limits
pub const MAX_RECIPIENTS: usize = 128;

// Account sizes
// Ledger (zero-copy): discriminator (8) + mint (32) + vault (32) + balance (8) + bump (1) + padding (7)
pub const LEDGER_SIZE: usize = 8 + 32 + 32 + 8 + 1 + 7; // 88 bytes

// RecipientList (borsh, allocated once at full capacity):
// - discriminator: 8
// - ledger: 32
// - holder: 32
// - bump: 1
// - recipients: Vec<RecipientShare> = 4 (len prefix) + (32 + 8) * 128 = 5124
// - remainder_owed: 8
// Total: 8 + 32 + 32 + 1 + 5124 + 8 = 5205
pub const RECIPIENT_SHARE_SIZE: usize = 32 + 8;
pub const RECIPIENT_LIST_SIZE: usize = 8 + 32 + 32 + 1 + 4 + RECIPIENT_SHARE_SIZE * MAX_RECIPIENTS + 8;
