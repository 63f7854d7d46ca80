#![no_std]

mod campaign;
mod error;
mod events;
mod storage;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

pub use error::CrowdfundingError;
pub use events::*;
pub use storage_types::*;

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the contract with its admin and the token donations are paid in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), CrowdfundingError> {
        admin.require_auth();

        if storage::has_admin(&env) {
            return Err(CrowdfundingError::AlreadyInitialized);
        }

        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_campaign_count(&env, 0);
        storage::extend_instance(&env);

        Ok(())
    }

    /// Create a new campaign owned by `owner`
    pub fn add_campaign(
        env: Env,
        owner: Address,
        name: String,
        image: String,
        target_amt: i128,
        deadline: u64,
        location: String,
    ) -> Result<u32, CrowdfundingError> {
        owner.require_auth();
        storage::require_initialized(&env)?;

        let now = env.ledger().timestamp();
        let campaign_id = storage::get_campaign_count(&env);

        let campaign = campaign::new_campaign(
            campaign_id,
            owner.clone(),
            name,
            image,
            location,
            target_amt,
            deadline,
            now,
        )
        .inspect_err(|_| log!(&env, "campaign rejected", owner, deadline, now))?;

        storage::save_campaign(&env, &campaign);
        storage::set_campaign_count(&env, campaign_id + 1);
        storage::extend_instance(&env);

        log!(&env, "campaign created", campaign_id);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                owner,
                target_amt,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Donate `amount` of the configured token to a campaign
    pub fn fund_campaign(
        env: Env,
        campaign_id: u32,
        donor: Address,
        amount: i128,
    ) -> Result<(), CrowdfundingError> {
        donor.require_auth();
        campaign::validate_donation_amount(amount)?;

        let token_address = storage::get_token(&env)?;
        let mut campaign = storage::get_campaign(&env, campaign_id)?;

        let (index, donation) = campaign
            .record_donation(donor.clone(), amount)
            .inspect_err(|_| log!(&env, "donation rejected", campaign_id, amount))?;

        let token_client = token::Client::new(&env, &token_address);
        token_client.transfer(&donor, &env.current_contract_address(), &amount);

        storage::save_donation(&env, campaign_id, index, &donation);
        storage::save_campaign(&env, &campaign);
        storage::extend_instance(&env);

        events::emit_campaign_funded(
            &env,
            events::CampaignFundedEvent {
                campaign_id,
                donor,
                amount,
                amount_collected: campaign.amount_collected,
            },
        );

        Ok(())
    }

    /// Close a campaign to further donations (owner only)
    pub fn set_campaign_completed(
        env: Env,
        campaign_id: u32,
        caller: Address,
    ) -> Result<(), CrowdfundingError> {
        caller.require_auth();

        let mut campaign = storage::get_campaign(&env, campaign_id)?;

        if !campaign.complete(&caller)? {
            log!(&env, "campaign already completed", campaign_id);
            return Ok(());
        }

        storage::save_campaign(&env, &campaign);
        storage::extend_instance(&env);

        log!(&env, "campaign completed", campaign_id, campaign.amount_collected);

        events::emit_campaign_completed(
            &env,
            events::CampaignCompletedEvent {
                campaign_id,
                owner: campaign.owner,
                amount_collected: campaign.amount_collected,
            },
        );

        Ok(())
    }

    /// View functions
    pub fn get_no_of_campaigns(env: Env) -> u32 {
        storage::get_campaign_count(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, CrowdfundingError> {
        storage::get_campaign(&env, campaign_id)
    }

    pub fn get_campaigns(env: Env) -> Result<Vec<Campaign>, CrowdfundingError> {
        let mut campaigns = Vec::new(&env);
        for campaign_id in 0..storage::get_campaign_count(&env) {
            campaigns.push_back(storage::get_campaign(&env, campaign_id)?);
        }
        Ok(campaigns)
    }

    pub fn get_donators(env: Env, campaign_id: u32) -> Result<Vec<Address>, CrowdfundingError> {
        let campaign = storage::get_campaign(&env, campaign_id)?;
        let mut donors = Vec::new(&env);
        for donation in storage::get_donations(&env, &campaign)?.iter() {
            donors.push_back(donation.donor);
        }
        Ok(donors)
    }

    pub fn get_donations(env: Env, campaign_id: u32) -> Result<Vec<i128>, CrowdfundingError> {
        let campaign = storage::get_campaign(&env, campaign_id)?;
        let mut amounts = Vec::new(&env);
        for donation in storage::get_donations(&env, &campaign)?.iter() {
            amounts.push_back(donation.amount);
        }
        Ok(amounts)
    }

    pub fn get_campaign_availability(
        env: Env,
        campaign_id: u32,
    ) -> Result<CampaignStatus, CrowdfundingError> {
        let campaign = storage::get_campaign(&env, campaign_id)?;
        Ok(campaign.status)
    }

    pub fn get_token(env: Env) -> Result<Address, CrowdfundingError> {
        storage::get_token(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, CrowdfundingError> {
        storage::get_admin(&env)
    }
}
