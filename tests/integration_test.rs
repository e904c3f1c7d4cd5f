use actor_framework::ActorClient;
use pop_inventory::catalog_actor::{CatalogError, StockDirection};
use pop_inventory::clients::NewProduct;
use pop_inventory::config::Config;
use pop_inventory::lifecycle::InventorySystem;
use pop_inventory::model::{
    ArticleId, FoodKind, NutrientValues, ProductDraft, TableSizeError, EMPTY_CATALOG,
};
use pop_inventory::ui::scripted::{spawn_scripted, ScriptedUi};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tokio::task::JoinHandle;

// --- Helpers ---

struct Harness {
    dir: tempfile::TempDir,
    config: Config,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::default().with_data_dir(dir.path());
        Self { dir, config }
    }

    fn seed(self, products: &str, nutrient_tables: &str) -> Self {
        fs::write(self.products_file(), products).unwrap();
        fs::write(self.nutrient_tables_file(), nutrient_tables).unwrap();
        self
    }

    fn products_file(&self) -> &Path {
        &self.config.storage.products_file
    }

    fn nutrient_tables_file(&self) -> &Path {
        &self.config.storage.nutrient_tables_file
    }

    fn products(&self) -> String {
        fs::read_to_string(self.products_file()).unwrap()
    }

    fn nutrient_tables(&self) -> String {
        fs::read_to_string(self.nutrient_tables_file()).unwrap()
    }

    fn start(&self) -> (InventorySystem, JoinHandle<ScriptedUi>) {
        let (ui, handle) = spawn_scripted([]);
        (InventorySystem::start(&self.config, ui), handle)
    }
}

async fn stop(system: InventorySystem, ui: JoinHandle<ScriptedUi>) -> ScriptedUi {
    system.shutdown().await.expect("clean shutdown");
    ui.await.expect("ui task")
}

fn draft(category: &str, name: &str, price: &str, description: &str) -> ProductDraft {
    ProductDraft {
        category: category.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
    }
}

const SEED_PRODUCTS: &str = "\
Accessory;10000;Shaker;9.95;Leakproof 600ml;12
ProteinBar;10001;Crunch;1.75;Peanut;8
EnergyDrink;10003;Zap;2.5;Citrus kick;0
";

const SEED_TABLES: &str = "\
10001;200;8;20;20
10003;110;0;27;0;80
";

// --- Tests ---

#[tokio::test]
async fn test_add_energy_drink_then_nutrients() {
    let harness = Harness::new();
    let (system, ui) = harness.start();

    let added = system
        .catalog
        .add_product(draft("Energy drinks", "Zap", "2.50", "Citrus kick"))
        .await
        .expect("Failed to add product");
    assert_eq!(
        added,
        NewProduct {
            id: ArticleId(10000),
            nutrients: Some(FoodKind::EnergyDrink),
        }
    );
    assert_eq!(harness.products(), "EnergyDrink;10000;Zap;2.5;Citrus kick;0\n");
    // The table comes later; nothing to write yet
    assert!(!harness.nutrient_tables_file().exists());

    let table = system
        .catalog
        .set_nutrient_table(
            added.id,
            NutrientValues {
                kcal: 110,
                fat: 0,
                carbs: 27,
                protein: 0,
                caffeine: Some(80),
            },
        )
        .await
        .expect("Failed to set nutrients");
    let entries: Vec<_> = table.entries().collect();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4], ("Caffeine(mg)", 80));
    assert_eq!(harness.nutrient_tables(), "10000;110;0;27;0;80\n");

    let product = system.catalog.find_by_id(added.id).await.unwrap();
    assert_eq!(product.stock, 0);
    assert_eq!(product.food().unwrap().nutrient_table(), Some(&table));

    let ui = stop(system, ui).await;
    assert!(ui.errors().is_empty(), "{:?}", ui.errors());
}

#[tokio::test]
async fn test_ids_fill_gaps_from_minimum() {
    let harness = Harness::new().seed(SEED_PRODUCTS, SEED_TABLES);
    let (system, ui) = harness.start();

    assert_eq!(system.catalog.next_id().await.unwrap(), ArticleId(10002));
    let added = system
        .catalog
        .add_product(draft("Accessories", "Strap", "4", "Wrist"))
        .await
        .unwrap();
    assert_eq!(added.id, ArticleId(10002));
    assert_eq!(added.nutrients, None);
    assert_eq!(system.catalog.next_id().await.unwrap(), ArticleId(10004));

    // Appended at the end, not sorted into the gap
    assert!(harness
        .products()
        .ends_with("EnergyDrink;10003;Zap;2.5;Citrus kick;0\nAccessory;10002;Strap;4.0;Wrist;0\n"));

    stop(system, ui).await;
}

#[tokio::test]
async fn test_failed_add_changes_nothing() {
    let harness = Harness::new().seed(SEED_PRODUCTS, SEED_TABLES);
    let (system, ui) = harness.start();

    let err = system
        .catalog
        .add_product(draft("Vitamins", "C", "1.0", "Orange"))
        .await
        .unwrap_err();
    assert_eq!(err, CatalogError::InvalidCategory);
    let err = system
        .catalog
        .add_product(draft("Accessories", "Strap", "-4", "Wrist"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Product price can't be negative");

    assert_eq!(system.catalog.list().await.unwrap().len(), 3);
    assert_eq!(harness.products(), SEED_PRODUCTS);

    stop(system, ui).await;
}

#[tokio::test]
async fn test_decrease_needs_enough_stock() {
    let harness = Harness::new().seed(SEED_PRODUCTS, SEED_TABLES);
    let (system, ui) = harness.start();
    let bar = ArticleId(10001);

    let err = system
        .catalog
        .adjust_stock(bar, "9", StockDirection::Decrease)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotEnoughStock {
            requested: 9,
            available: 8
        }
    );
    assert_eq!(system.catalog.find_by_id(bar).await.unwrap().stock, 8);

    assert_eq!(
        system
            .catalog
            .adjust_stock(bar, "5", StockDirection::Decrease)
            .await,
        Ok(3)
    );
    assert_eq!(
        system
            .catalog
            .adjust_stock(bar, "10", StockDirection::Increase)
            .await,
        Ok(13)
    );
    assert!(harness.products().contains("ProteinBar;10001;Crunch;1.75;Peanut;13\n"));

    assert_eq!(
        system
            .catalog
            .adjust_stock(ArticleId(10009), "1", StockDirection::Increase)
            .await,
        Err(CatalogError::NotFound(ArticleId(10009)))
    );

    stop(system, ui).await;
}

#[tokio::test]
async fn test_remove_drops_product_and_nutrients() {
    let harness = Harness::new().seed(SEED_PRODUCTS, SEED_TABLES);
    let (system, ui) = harness.start();
    let bar = ArticleId(10001);

    let removed = system.catalog.remove_product(bar).await.unwrap();
    assert_eq!(removed.map(|p| p.name), Some("Crunch".to_string()));
    assert_eq!(
        system.catalog.find_by_id(bar).await,
        Err(CatalogError::NotFound(bar))
    );
    assert!(!harness.products().contains("10001"));
    assert_eq!(harness.nutrient_tables(), "10003;110;0;27;0;80\n");

    // Absent id: no error, files still rewritten
    fs::write(harness.nutrient_tables_file(), "stale\n").unwrap();
    assert!(system.catalog.remove_product(bar).await.unwrap().is_none());
    assert_eq!(harness.nutrient_tables(), "10003;110;0;27;0;80\n");

    let ui = stop(system, ui).await;
    assert!(ui.errors().is_empty(), "{:?}", ui.errors());
}

#[tokio::test]
async fn test_canonical_files_survive_rewrite() {
    let harness = Harness::new().seed(SEED_PRODUCTS, SEED_TABLES);
    let (system, ui) = harness.start();

    system
        .catalog
        .remove_product(ArticleId(19999))
        .await
        .unwrap();
    assert_eq!(harness.products(), SEED_PRODUCTS);
    assert_eq!(harness.nutrient_tables(), SEED_TABLES);

    stop(system, ui).await;
}

#[tokio::test]
async fn test_load_skips_and_reports_bad_lines() {
    let harness = Harness::new().seed(
        "Accessory;10000;Shaker;9.95;Leakproof;1\n\
         Vitamins;10001;C;1.0;Orange;1\n\
         ProteinBar;10002;Crunch;1.75;Peanut;8\n\
         EnergyDrink;10003;Zap;2.5;Citrus kick;0\n",
        "10002;200;8;20;20\n\
         10002;1;2;3\n\
         10003;110;0;27;0\n\
         12345;1;2;3;4\n",
    );
    let (system, ui) = harness.start();

    let listing = system.catalog.list_all().await.unwrap();
    let ids: Vec<u32> = listing.lines.iter().map(|l| l.id.0).collect();
    assert_eq!(ids, vec![10000, 10002, 10003]);

    let bar = system.catalog.find_by_id(ArticleId(10002)).await.unwrap();
    assert_eq!(
        bar.food().unwrap().nutrient_table().unwrap().values(),
        vec![200, 8, 20, 20]
    );
    let drink = system.catalog.find_by_id(ArticleId(10003)).await.unwrap();
    assert!(drink.food().unwrap().nutrient_table().is_none());

    let ui = stop(system, ui).await;
    // The unknown id 12345 is not reported
    assert_eq!(
        ui.errors(),
        vec![
            "Unknown class: Vitamins",
            "Missing fields in line: 10002;1;2;3",
            "Missing fields in line: 10003;110;0;27;0",
        ]
    );
}

#[tokio::test]
async fn test_nutrient_table_rules() {
    let harness = Harness::new().seed(SEED_PRODUCTS, SEED_TABLES);
    let (system, ui) = harness.start();
    let values = NutrientValues {
        kcal: 190,
        fat: 7,
        carbs: 21,
        protein: 19,
        caffeine: None,
    };

    assert_eq!(
        system
            .catalog
            .set_nutrient_table(ArticleId(10000), values)
            .await,
        Err(CatalogError::NotFoodProduct(ArticleId(10000)))
    );
    let err = system
        .catalog
        .set_nutrient_table(
            ArticleId(10001),
            NutrientValues {
                caffeine: Some(5),
                ..values
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::TableSize(TableSizeError::TooMany { .. })
    ));
    let err = system
        .catalog
        .set_nutrient_table(ArticleId(10003), values)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::TableSize(TableSizeError::Missing { .. })
    ));
    assert_eq!(harness.nutrient_tables(), SEED_TABLES);

    system
        .catalog
        .set_nutrient_table(ArticleId(10001), values)
        .await
        .unwrap();
    assert_eq!(
        harness.nutrient_tables(),
        "10001;190;7;21;19\n10003;110;0;27;0;80\n"
    );

    stop(system, ui).await;
}

#[tokio::test]
async fn test_food_without_table_is_reported_on_save() {
    let harness = Harness::new();
    let (system, ui) = harness.start();

    system
        .catalog
        .add_product(draft("Protein powders", "Whey", "29.9", "Vanilla"))
        .await
        .unwrap();
    system
        .catalog
        .remove_product(ArticleId(10042))
        .await
        .unwrap();
    assert_eq!(harness.nutrient_tables(), "");

    let food = system.catalog.food_products().await.unwrap();
    assert_eq!(food.len(), 1);

    let ui = stop(system, ui).await;
    assert_eq!(ui.errors(), vec!["No nutrient table found for article 10000"]);
}

#[tokio::test]
async fn test_concurrent_adds_get_distinct_ids() {
    let harness = Harness::new();
    let (system, ui) = harness.start();

    let first = system.catalog.clone();
    let second = system.catalog.clone();
    let (a, b) = tokio::join!(
        first.add_product(draft("Accessories", "Shaker", "9.95", "Leakproof")),
        second.add_product(draft("Protein bars", "Crunch", "1.75", "Peanut")),
    );
    let mut ids = vec![a.unwrap().id, b.unwrap().id];
    ids.sort();
    assert_eq!(ids, vec![ArticleId(10000), ArticleId(10001)]);
    assert_eq!(harness.products().lines().count(), 2);

    // Every client has to go before the actor stops
    drop((first, second));
    stop(system, ui).await;
}

#[tokio::test]
async fn test_reload_and_empty_listing() {
    let mut harness = Harness::new();
    harness.config.storage.atomic_writes = false;
    let (system, ui) = harness.start();

    assert_eq!(
        system.catalog.list_all().await.unwrap().to_string(),
        EMPTY_CATALOG
    );

    fs::write(harness.products_file(), SEED_PRODUCTS).unwrap();
    assert_eq!(system.catalog.reload().await.unwrap(), 3);
    assert_eq!(
        system.catalog.list_all().await.unwrap().to_string(),
        "Article ID: 10000 Shaker stock: 12\n\
         Article ID: 10001 Crunch stock: 8\n\
         Article ID: 10003 Zap stock: 0"
    );

    system
        .catalog
        .adjust_stock(ArticleId(10003), "6", StockDirection::Increase)
        .await
        .unwrap();
    assert!(harness.products().ends_with("EnergyDrink;10003;Zap;2.5;Citrus kick;6\n"));
    assert!(!harness.dir.path().join("Products.txt.tmp").exists());

    stop(system, ui).await;
}
