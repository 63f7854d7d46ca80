use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u32,
    pub owner: Address,
    pub target_amt: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFundedEvent {
    pub campaign_id: u32,
    pub donor: Address,
    pub amount: i128,
    pub amount_collected: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCompletedEvent {
    pub campaign_id: u32,
    pub owner: Address,
    pub amount_collected: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_funded"),),
        event,
    );
}

pub fn emit_campaign_completed(env: &Env, event: CampaignCompletedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_completed"),),
        event,
    );
}
