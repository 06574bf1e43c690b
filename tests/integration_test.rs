use actor_framework::ActorClient;
use resource_api::lifecycle::ResourceSystem;
use resource_api::menu_actor::MenuItemError;
use resource_api::model::{MenuItemCreate, MenuItemPatch, VehicleCreate, VehiclePatch};
use resource_api::vehicle_actor::VehicleError;
use std::collections::HashSet;

/// Full lifecycle of one car through the real actor.
#[tokio::test]
async fn test_vehicle_lifecycle() {
    let system = ResourceSystem::new(16);
    let cars = &system.vehicle_client;

    assert!(cars.list().await.unwrap().is_empty());

    let car = cars
        .create_vehicle(VehicleCreate::new("Toyota", "Corolla", 2020))
        .await
        .expect("Failed to create car");
    assert_eq!(car.vin, "1M8GDM9A_1000");
    assert_eq!(cars.get(car.id).await.unwrap(), car);

    // Empty VIN on replace keeps the generated one.
    cars.replace(
        car.id,
        VehicleCreate {
            vin: Some(String::new()),
            ..VehicleCreate::new("Toyota", "Corolla", 2021)
        },
    )
    .await
    .unwrap();
    let replaced = cars.get(car.id).await.unwrap();
    assert_eq!(replaced.year, 2021);
    assert_eq!(replaced.vin, "1M8GDM9A_1000");
    assert_eq!(replaced.added_date, car.added_date);

    cars.patch(
        car.id,
        VehiclePatch {
            model: Some("Camry".into()),
            make: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let patched = cars.get(car.id).await.unwrap();
    assert_eq!(patched.make, "Toyota");
    assert_eq!(patched.model, "Camry");
    assert_eq!(patched.year, 2021);

    cars.delete(car.id).await.unwrap();
    assert_eq!(
        cars.get(car.id).await,
        Err(VehicleError::NotFound(car.id.to_string()))
    );
    assert_eq!(
        cars.delete(car.id).await,
        Err(VehicleError::NotFound(car.id.to_string()))
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_create_leaves_collection_and_counter_untouched() {
    let system = ResourceSystem::new(16);

    let result = system
        .vehicle_client
        .create_vehicle(VehicleCreate::new("Benz", "Patent-Motorwagen", 1885))
        .await;
    assert!(matches!(result, Err(VehicleError::InvalidYear { year: 1885, .. })));
    assert!(system.vehicle_client.list().await.unwrap().is_empty());

    let result = system
        .menu_client
        .create_item(MenuItemCreate::new("Mitarashi", "Sweet soy", 0))
        .await;
    assert_eq!(result, Err(MenuItemError::InvalidSkewerCount(0)));

    // The failed attempts did not consume codes.
    let car = system
        .vehicle_client
        .create_vehicle(VehicleCreate::new("Benz", "Velo", 1894))
        .await
        .unwrap();
    assert_eq!(car.vin, "1M8GDM9A_1000");
    let item = system
        .menu_client
        .create_item(MenuItemCreate::new("Mitarashi", "Sweet soy", 3))
        .await
        .unwrap();
    assert!(item.sku.ends_with("-1000"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_lifecycle_and_order_after_delete() {
    let system = ResourceSystem::new(16);
    let menu = &system.menu_client;

    let mut ids = Vec::new();
    for flavor in ["Mitarashi", "Hanami", "Anko", "Goma"] {
        let item = menu
            .create_item(MenuItemCreate::new(flavor, "Glaze", 3))
            .await
            .unwrap();
        ids.push(item.id);
    }

    menu.delete(ids[1]).await.unwrap();
    let flavors: Vec<_> = menu
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.flavor)
        .collect();
    assert_eq!(flavors, ["Mitarashi", "Anko", "Goma"]);

    // Replace and patch skip validation.
    menu.replace(ids[0], MenuItemCreate::new("Mitarashi", "Sweet soy", 0))
        .await
        .unwrap();
    menu.patch(
        ids[2],
        MenuItemPatch {
            skewer_count: Some(-1),
            is_new_arrival: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(menu.get(ids[0]).await.unwrap().skewer_count, 0);
    let goma = menu.get(ids[2]).await.unwrap();
    assert_eq!(goma.skewer_count, -1);
    assert!(goma.is_new_arrival);

    assert_eq!(
        menu.patch(ids[1], MenuItemPatch::default()).await,
        Err(MenuItemError::NotFound(ids[1].to_string()))
    );

    system.shutdown().await.unwrap();
}

/// Concurrent creates through cloned clients never share an id or a generated code.
#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids_and_codes() {
    let system = ResourceSystem::new(4);

    let mut handles = Vec::new();
    for i in 0..50 {
        let cars = system.vehicle_client.clone();
        handles.push(tokio::spawn(async move {
            cars.create_vehicle(VehicleCreate::new("Make", format!("Model {i}"), 2000))
                .await
        }));
    }

    let mut ids = HashSet::new();
    let mut vins = HashSet::new();
    for handle in handles {
        let car = handle.await.unwrap().unwrap();
        ids.insert(car.id);
        vins.insert(car.vin);
    }
    assert_eq!(ids.len(), 50);
    assert_eq!(vins.len(), 50);
    assert_eq!(system.vehicle_client.list().await.unwrap().len(), 50);

    system.shutdown().await.unwrap();
}

/// Concurrent patches of different fields on one car are all applied.
#[tokio::test]
async fn test_concurrent_patches_do_not_lose_updates() {
    let system = ResourceSystem::new(4);
    let car = system
        .vehicle_client
        .create_vehicle(VehicleCreate::new("Honda", "Civic", 2010))
        .await
        .unwrap();

    let make = {
        let cars = system.vehicle_client.clone();
        tokio::spawn(async move {
            cars.patch(
                car.id,
                VehiclePatch {
                    make: Some("Acura".into()),
                    ..Default::default()
                },
            )
            .await
        })
    };
    let year = {
        let cars = system.vehicle_client.clone();
        tokio::spawn(async move {
            cars.patch(
                car.id,
                VehiclePatch {
                    year: Some(2012),
                    ..Default::default()
                },
            )
            .await
        })
    };
    make.await.unwrap().unwrap();
    year.await.unwrap().unwrap();

    let stored = system.vehicle_client.get(car.id).await.unwrap();
    assert_eq!(stored.make, "Acura");
    assert_eq!(stored.year, 2012);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_caller_supplied_codes_may_collide_with_generated_ones() {
    let system = ResourceSystem::new(8);

    let generated = system
        .vehicle_client
        .create_vehicle(VehicleCreate::new("Ford", "Focus", 2015))
        .await
        .unwrap();
    let supplied = system
        .vehicle_client
        .create_vehicle(VehicleCreate::new("Ford", "Fiesta", 2016).with_vin(generated.vin.clone()))
        .await
        .unwrap();

    assert_eq!(generated.vin, supplied.vin);
    assert_ne!(generated.id, supplied.id);

    system.shutdown().await.unwrap();
}
