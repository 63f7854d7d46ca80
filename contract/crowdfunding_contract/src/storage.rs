use soroban_sdk::{Address, Env, Vec};

use crate::error::CrowdfundingError;
use crate::storage_types::{Campaign, DataKey, Donation, TTL_INSTANCE, TTL_PERSISTENT};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn require_initialized(env: &Env) -> Result<(), CrowdfundingError> {
    if !has_admin(env) {
        return Err(CrowdfundingError::NotInitialized);
    }
    Ok(())
}

/// Number of campaigns created so far, which is also the next campaign id.
pub fn get_campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
}

/// Load a campaign and keep its entry alive, reads included.
pub fn get_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, CrowdfundingError> {
    let key = DataKey::Campaign(campaign_id);
    let campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(CrowdfundingError::NotFound)?;
    extend_persistent(env, &key);
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn save_donation(env: &Env, campaign_id: u32, index: u32, donation: &Donation) {
    let key = DataKey::Donation(campaign_id, index);
    env.storage().persistent().set(&key, donation);
    extend_persistent(env, &key);
}

/// All donations of a campaign in donation order.
pub fn get_donations(env: &Env, campaign: &Campaign) -> Result<Vec<Donation>, CrowdfundingError> {
    let mut donations = Vec::new(env);
    for index in 0..campaign.donation_count {
        let key = DataKey::Donation(campaign.id, index);
        let donation: Donation = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(CrowdfundingError::NotFound)?;
        extend_persistent(env, &key);
        donations.push_back(donation);
    }
    Ok(donations)
}
