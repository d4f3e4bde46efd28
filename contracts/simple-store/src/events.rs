use soroban_sdk::{Address, contractevent};


#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemBought {
    #[topic]
    pub holder: Address,
    #[topic]
    pub buyer: Address,
    pub id: u64,
    pub amount: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    #[topic]
    pub to: Address,
    pub amount: i128,
}
