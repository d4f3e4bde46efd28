use soroban_sdk::{Address, contractevent};


#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemUpdate {
    #[topic]
    pub id: u64,
    pub quantity: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrantedAccessToProducts {
    #[topic]
    pub operator: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevokedAccessToProducts {
    #[topic]
    pub operator: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferSingle {
    #[topic]
    pub operator: Address,
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub id: u64,
    pub amount: u64,
}
