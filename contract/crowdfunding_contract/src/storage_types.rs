use soroban_sdk::{contracttype, Address, String};

// Instance entries live as long as the contract, persistent entries per campaign
// and per donation
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    CampaignCount,
    Campaign(u32),
    Donation(u32, u32), // (campaign id, donation index)
}

/// Lifecycle of a campaign's funding window.
///
/// The discriminants are part of the public encoding: `Completed` is 0 and
/// `InProgress` is 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignStatus {
    Completed = 0,
    InProgress = 1,
}

/// One recorded contribution, in donation order.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donation {
    pub donor: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: u32,
    pub owner: Address,
    pub name: String,
    pub image: String,          // Image URL or content hash
    pub location: String,
    pub target_amt: i128,       // Informational, never enforced as a cap
    pub deadline: u64,          // Ledger timestamp, seconds
    pub created_at: u64,
    pub amount_collected: i128, // Always the sum of the stored donations
    pub status: CampaignStatus,
    pub donation_count: u32,    // Donations live under DataKey::Donation(id, 0..count)
}

// Constants
pub const DAY_IN_LEDGERS: u32 = 17280; // ~5s per ledger
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
