use soroban_sdk::{testutils::Address as _, token, vec, Address, Env};
use simple_store::StoreError;
use product::ProductError;
use store_deploy::{Deployment, NamedAccounts};

/// 0.1 of the native asset.
const PRICE: i128 = 1_000_000;
const PRODUCT_ID: u64 = 1;
const PRODUCT_QUANTITY: u64 = 11;
const PRODUCTS_PER_ORDER: u64 = 1;

fn funded_user(e: &Env, deployment: &Deployment) -> Address {
    let user = Address::generate(e);
    token::StellarAssetClient::new(e, &deployment.payment_token).mint(&user, &(10 * PRICE));
    user
}

fn stocked(e: &Env) -> (Deployment, NamedAccounts) {
    let (deployment, accounts) = Deployment::fixture(e).unwrap();
    deployment
        .product_client(e)
        .add_product(&accounts.deployer, &PRODUCT_ID, &PRODUCT_QUANTITY);
    (deployment, accounts)
}

#[test]
fn only_deployer_adds_products() {
    let e = Env::default();
    let (deployment, _) = Deployment::fixture(&e).unwrap();
    let user = Address::generate(&e);

    let result = deployment
        .product_client(&e)
        .try_add_product(&user, &PRODUCT_ID, &PRODUCT_QUANTITY);
    assert_eq!(result, Err(Ok(ProductError::NotOwnerOfContract)));
}

#[test]
fn purchase_moves_one_unit_to_buyer() {
    let e = Env::default();
    let (deployment, accounts) = stocked(&e);
    let product = deployment.product_client(&e);
    let store = deployment.store_client(&e);
    let user = funded_user(&e, &deployment);

    store.buy_product(&user, &PRODUCT_ID, &PRICE);

    assert_eq!(product.balance_of(&user, &PRODUCT_ID), PRODUCTS_PER_ORDER);
    assert_eq!(
        product.balance_of(&accounts.deployer, &PRODUCT_ID),
        PRODUCT_QUANTITY - PRODUCTS_PER_ORDER,
    );
    assert_eq!(store.show_owners(&PRODUCT_ID), vec![&e, user.clone()]);
}

#[test]
fn second_buyer_is_appended_to_owners() {
    let e = Env::default();
    let (deployment, _) = stocked(&e);
    let store = deployment.store_client(&e);
    let user1 = funded_user(&e, &deployment);
    let user2 = funded_user(&e, &deployment);

    store.buy_product(&user1, &PRODUCT_ID, &PRICE);
    store.buy_product(&user2, &PRODUCT_ID, &PRICE);

    assert_eq!(store.show_owners(&PRODUCT_ID), vec![&e, user1.clone(), user2.clone()]);
}

#[test]
fn low_price_and_repeat_purchase_are_rejected() {
    let e = Env::default();
    let (deployment, accounts) = stocked(&e);
    let product = deployment.product_client(&e);
    let store = deployment.store_client(&e);
    let user = funded_user(&e, &deployment);

    store.buy_product(&user, &PRODUCT_ID, &PRICE);

    let result = store.try_buy_product(&user, &PRODUCT_ID, &99_999);
    assert_eq!(result, Err(Ok(StoreError::PriceTooLow)));

    let result = store.try_buy_product(&user, &PRODUCT_ID, &PRICE);
    assert_eq!(result, Err(Ok(StoreError::AlreadyBoughtThatItem)));

    assert_eq!(product.balance_of(&user, &PRODUCT_ID), PRODUCTS_PER_ORDER);
    assert_eq!(
        product.balance_of(&accounts.deployer, &PRODUCT_ID),
        PRODUCT_QUANTITY - PRODUCTS_PER_ORDER,
    );
}

#[test]
fn store_lists_unique_products() {
    let e = Env::default();
    let (deployment, accounts) = stocked(&e);
    let product = deployment.product_client(&e);

    product.add_product(&accounts.deployer, &PRODUCT_ID, &PRODUCT_QUANTITY);
    product.add_product(&accounts.deployer, &11, &PRODUCT_QUANTITY);
    product.add_product(&accounts.deployer, &8, &PRODUCT_QUANTITY);

    assert_eq!(deployment.store_client(&e).show_products(), vec![&e, PRODUCT_ID, 11, 8]);
}
