//! Campaign state machine.
//!
//! Everything here works on a `Campaign` value with "now" and the caller
//! passed in explicitly. Entry points persist the value only when a rule
//! returns `Ok`, so a rejected call never leaves a partial update behind.

use soroban_sdk::{Address, String};

use crate::error::CrowdfundingError;
use crate::storage_types::{Campaign, CampaignStatus, Donation};

/// Deadline must be strictly after `now`.
pub fn validate_deadline(now: u64, deadline: u64) -> Result<(), CrowdfundingError> {
    if deadline <= now {
        return Err(CrowdfundingError::InvalidDeadline);
    }
    Ok(())
}

pub fn validate_target_amount(target_amt: i128) -> Result<(), CrowdfundingError> {
    if target_amt <= 0 {
        return Err(CrowdfundingError::InvalidTargetAmount);
    }
    Ok(())
}

pub fn validate_donation_amount(amount: i128) -> Result<(), CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::InvalidDonationAmount);
    }
    Ok(())
}

/// Build a fresh in-progress campaign, rejecting a past deadline or a
/// non-positive target.
#[allow(clippy::too_many_arguments)]
pub fn new_campaign(
    id: u32,
    owner: Address,
    name: String,
    image: String,
    location: String,
    target_amt: i128,
    deadline: u64,
    now: u64,
) -> Result<Campaign, CrowdfundingError> {
    validate_deadline(now, deadline)?;
    validate_target_amount(target_amt)?;

    Ok(Campaign {
        id,
        owner,
        name,
        image,
        location,
        target_amt,
        deadline,
        created_at: now,
        amount_collected: 0,
        status: CampaignStatus::InProgress,
        donation_count: 0,
    })
}

impl Campaign {
    pub fn is_in_progress(&self) -> bool {
        self.status == CampaignStatus::InProgress
    }

    /// Count a donation and grow `amount_collected` by the same amount.
    ///
    /// Returns the index the donation is stored under. The amount check runs
    /// before the status check. Nothing is modified unless every check passes.
    pub fn record_donation(
        &mut self,
        donor: Address,
        amount: i128,
    ) -> Result<(u32, Donation), CrowdfundingError> {
        validate_donation_amount(amount)?;
        if !self.is_in_progress() {
            return Err(CrowdfundingError::CampaignNotInProgress);
        }

        let amount_collected = self
            .amount_collected
            .checked_add(amount)
            .ok_or(CrowdfundingError::Overflow)?;
        let index = self.donation_count;
        let donation_count = index.checked_add(1).ok_or(CrowdfundingError::Overflow)?;

        self.amount_collected = amount_collected;
        self.donation_count = donation_count;
        Ok((index, Donation { donor, amount }))
    }

    /// Move the campaign to `Completed`.
    ///
    /// Returns `Ok(false)` when it was already completed, in which case
    /// nothing changes.
    pub fn complete(&mut self, caller: &Address) -> Result<bool, CrowdfundingError> {
        if caller != &self.owner {
            return Err(CrowdfundingError::Unauthorized);
        }
        if self.status == CampaignStatus::Completed {
            return Ok(false);
        }
        self.status = CampaignStatus::Completed;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    const NOW: u64 = 1_700_000_000;

    fn sample_campaign(env: &Env, owner: &Address) -> Campaign {
        new_campaign(
            0,
            owner.clone(),
            String::from_str(env, "Save the Tigers"),
            String::from_str(env, "tiger.jpg"),
            String::from_str(env, "Asia"),
            5,
            NOW + 86400,
            NOW,
        )
        .unwrap()
    }

    #[test]
    fn deadline_must_be_strictly_in_the_future() {
        assert_eq!(validate_deadline(NOW, NOW + 1), Ok(()));
        assert_eq!(validate_deadline(NOW, NOW), Err(CrowdfundingError::InvalidDeadline));
        assert_eq!(validate_deadline(NOW, NOW - 86400), Err(CrowdfundingError::InvalidDeadline));
    }

    #[test]
    fn new_campaign_rejects_non_positive_target() {
        let env = Env::default();
        let owner = Address::generate(&env);

        let result = new_campaign(
            0,
            owner,
            String::from_str(&env, "Nothing"),
            String::from_str(&env, "none.jpg"),
            String::from_str(&env, "Nowhere"),
            0,
            NOW + 86400,
            NOW,
        );
        assert_eq!(result, Err(CrowdfundingError::InvalidTargetAmount));
    }

    #[test]
    fn new_campaign_starts_empty_and_in_progress() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let campaign = sample_campaign(&env, &owner);

        assert_eq!(campaign.status, CampaignStatus::InProgress);
        assert_eq!(campaign.amount_collected, 0);
        assert_eq!(campaign.created_at, NOW);
        assert_eq!(campaign.donation_count, 0);
    }

    #[test]
    fn record_donation_keeps_total_equal_to_sum() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let donor = Address::generate(&env);
        let another_donor = Address::generate(&env);
        let mut campaign = sample_campaign(&env, &owner);

        assert_eq!(
            campaign.record_donation(donor.clone(), 1),
            Ok((0, Donation { donor: donor.clone(), amount: 1 }))
        );
        assert_eq!(
            campaign.record_donation(another_donor.clone(), 2),
            Ok((1, Donation { donor: another_donor, amount: 2 }))
        );
        assert_eq!(
            campaign.record_donation(donor.clone(), 4),
            Ok((2, Donation { donor, amount: 4 }))
        );

        assert_eq!(campaign.amount_collected, 7);
        assert_eq!(campaign.donation_count, 3);
    }

    #[test]
    fn zero_donation_is_rejected_before_status() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let donor = Address::generate(&env);
        let mut campaign = sample_campaign(&env, &owner);
        campaign.complete(&owner).unwrap();

        assert_eq!(
            campaign.record_donation(donor.clone(), 0),
            Err(CrowdfundingError::InvalidDonationAmount)
        );
        assert_eq!(
            campaign.record_donation(donor, 1),
            Err(CrowdfundingError::CampaignNotInProgress)
        );
        assert_eq!(campaign.amount_collected, 0);
        assert_eq!(campaign.donation_count, 0);
    }

    #[test]
    fn overflow_leaves_campaign_untouched() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let donor = Address::generate(&env);
        let mut campaign = sample_campaign(&env, &owner);

        campaign.record_donation(donor.clone(), i128::MAX).unwrap();
        assert_eq!(
            campaign.record_donation(donor, 1),
            Err(CrowdfundingError::Overflow)
        );
        assert_eq!(campaign.amount_collected, i128::MAX);
        assert_eq!(campaign.donation_count, 1);
    }

    #[test]
    fn complete_is_owner_only_and_idempotent() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let stranger = Address::generate(&env);
        let mut campaign = sample_campaign(&env, &owner);

        assert_eq!(campaign.complete(&stranger), Err(CrowdfundingError::Unauthorized));
        assert!(campaign.is_in_progress());

        assert_eq!(campaign.complete(&owner), Ok(true));
        assert_eq!(campaign.complete(&owner), Ok(false));
        assert_eq!(campaign.status, CampaignStatus::Completed);
    }
}
