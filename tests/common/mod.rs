#![allow(dead_code)]

use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{Message, Messages};

use disease_cure::ecs::resources::CureConfig;
use disease_cure::ecs::{DiseaseCarrier, DiseaseCurePlugin, SimTick, build_sim_app_deterministic};
use disease_cure::model::DiseaseCatalog;

pub const CATALOG_JSON: &str = r#"{
    "diseases": [
        {
            "id": "space_flu",
            "name": "Space Flu",
            "post_cure_immunity": 0.8,
            "cure_resist": 0.1,
            "stages": [
                { "stage": 1, "symptoms": ["cough"] },
                {
                    "stage": 2,
                    "symptoms": ["cough", "fever"],
                    "cure_steps": [
                        {
                            "type": "reagent",
                            "lower_stage": true,
                            "requirements": [{ "reagent": "inaprovaline", "quantity": 1 }]
                        }
                    ]
                }
            ],
            "cure_steps": [
                {
                    "type": "reagent",
                    "requirements": [{ "reagent": "spaceacillin", "quantity": 5 }]
                },
                { "type": "wait", "required_ticks": 600, "wait_chance": 1.0 }
            ]
        },
        {
            "id": "cold",
            "stages": [{ "stage": 1 }],
            "post_cure_immunity": 0.3,
            "cure_steps": [
                { "type": "bedrest", "bedrest_chance": 1.0, "sleep_multiplier": 1 }
            ]
        }
    ],
    "symptoms": [
        {
            "id": "cough",
            "name": "Cough",
            "cure_duration": 30,
            "cure_steps": [
                { "type": "reagent", "requirements": [{ "reagent": "honey", "quantity": 1 }] }
            ],
            "behaviors": [{ "kind": "emote", "params": { "text": "coughs" } }]
        },
        {
            "id": "fever",
            "cure_duration": 60,
            "cure_steps": [
                { "type": "temperature", "max_temperature": 310, "required_ticks": 3 }
            ],
            "behaviors": [{ "kind": "heat" }]
        }
    ],
    "reagents": [{ "id": "spaceacillin", "name": "Spaceacillin" }]
}"#;

pub fn catalog() -> DiseaseCatalog {
    DiseaseCatalog::from_json_str(CATALOG_JSON).unwrap()
}

pub fn setup_app() -> App {
    let mut app = build_sim_app_deterministic(CureConfig::default());
    app.add_plugins(DiseaseCurePlugin);
    app.insert_resource(catalog());
    app
}

pub fn spawn_patient(app: &mut App, diseases: &[(&str, u32)]) -> Entity {
    let mut carrier = DiseaseCarrier::new();
    for (id, stage) in diseases {
        carrier.infect(*id, *stage);
    }
    app.world_mut().spawn(carrier).id()
}

pub fn carrier(app: &App, entity: Entity) -> &DiseaseCarrier {
    app.world().get::<DiseaseCarrier>(entity).unwrap()
}

pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

pub fn drain<M: Message>(app: &mut App) -> Vec<M> {
    app.world_mut().resource_mut::<Messages<M>>().drain().collect()
}
