use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Deadline is not strictly after the current ledger timestamp.
    InvalidDeadline = 3,
    InvalidTargetAmount = 4,
    /// Donation amount is zero or negative.
    InvalidDonationAmount = 5,
    CampaignNotInProgress = 6,
    NotFound = 7,
    /// Caller is not the campaign owner.
    Unauthorized = 8,
    Overflow = 9,
}
