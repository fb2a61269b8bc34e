//! Schema-level behaviour of the sensor catalog tables: joins and cascades
//! that have no HTTP surface of their own.

use chrono::{TimeZone, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, Set,
};

use sensorhub::common::AppState;
use sensorhub::config::Config;
use sensorhub::entity::{deployments, locations, sensor_deployments, sensors};

async fn store() -> DatabaseConnection {
    AppState::initialize(Config::in_memory())
        .await
        .expect("in-memory database should initialise")
        .db
}

async fn sensor(db: &DatabaseConnection, name: &str) -> sensors::Model {
    sensors::ActiveModel {
        name: Set(name.to_string()),
        model: Set("donkeysensor2000".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn deployment(db: &DatabaseConnection, name: &str) -> deployments::Model {
    deployments::ActiveModel {
        start_time: Set(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()),
        end_time: Set(Utc.with_ymd_and_hms(2026, 3, 31, 0, 0, 0).unwrap()),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn link(db: &DatabaseConnection, deployment: &deployments::Model, sensor: &sensors::Model) {
    sensor_deployments::Entity::insert(sensor_deployments::ActiveModel {
        deployment_id: Set(deployment.id),
        sensor_id: Set(sensor.id),
    })
    .exec_without_returning(db)
    .await
    .unwrap();
}

#[tokio::test]
async fn sensors_and_deployments_join_both_ways() {
    let db = store().await;
    let a = sensor(&db, "a").await;
    let b = sensor(&db, "b").await;
    let spring = deployment(&db, "spring").await;
    let autumn = deployment(&db, "autumn").await;

    link(&db, &spring, &a).await;
    link(&db, &spring, &b).await;
    link(&db, &autumn, &a).await;

    let in_spring = spring.find_related(sensors::Entity).all(&db).await.unwrap();
    assert_eq!(in_spring.len(), 2);

    let mut of_a: Vec<String> = a
        .find_related(deployments::Entity)
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    of_a.sort();
    assert_eq!(of_a, vec!["autumn", "spring"]);
}

#[tokio::test]
async fn deleting_either_side_drops_the_link_only() {
    let db = store().await;
    let a = sensor(&db, "a").await;
    let spring = deployment(&db, "spring").await;
    let autumn = deployment(&db, "autumn").await;
    link(&db, &spring, &a).await;
    link(&db, &autumn, &a).await;

    deployments::Entity::delete_by_id(spring.id)
        .exec(&db)
        .await
        .unwrap();
    assert_eq!(sensor_deployments::Entity::find().count(&db).await.unwrap(), 1);
    assert!(sensors::Entity::find_by_id(a.id).one(&db).await.unwrap().is_some());

    sensors::Entity::delete_by_id(a.id).exec(&db).await.unwrap();
    assert_eq!(sensor_deployments::Entity::find().count(&db).await.unwrap(), 0);
    assert!(deployments::Entity::find_by_id(autumn.id)
        .one(&db)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn deleting_a_location_detaches_its_sensor() {
    let db = store().await;
    let location = locations::ActiveModel {
        name: Set("Roof".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let mut attached: sensors::ActiveModel = sensor(&db, "a").await.into();
    attached.location_id = Set(Some(location.id));
    let attached = attached.update(&db).await.unwrap();

    locations::Entity::delete_by_id(location.id)
        .exec(&db)
        .await
        .unwrap();

    let reloaded = sensors::Entity::find_by_id(attached.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.location_id, None);
}
