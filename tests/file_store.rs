use kyrel::api::{KyrelApi, KyrelPaths, MessageLevel, Roster};
use kyrel::error::KyrelError;
use kyrel::model::{Category, Employee, Location, MovementKind, Product};
use kyrel::store::fs::FileStore;
use kyrel::store::{DataStore, Document, LoadOrigin};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("datos.json"));
    (dir, store)
}

fn api_in(dir: &TempDir) -> KyrelApi<FileStore> {
    let data_file = dir.path().join("datos.json");
    let paths = KyrelPaths {
        config_dir: dir.path().to_path_buf(),
        data_file: data_file.clone(),
    };
    KyrelApi::new(FileStore::new(data_file), paths)
}

#[test]
fn missing_file_loads_fresh() {
    let (_dir, store) = setup();
    let loaded = store.load();
    assert_eq!(loaded.origin, LoadOrigin::Fresh);
    assert_eq!(loaded.document, Document::default());
}

#[test]
fn save_then_load_returns_same_document() {
    let (_dir, mut store) = setup();
    let mut doc = Document::default();
    doc.products.push(Product {
        id: 1,
        name: "Basic Tee".to_string(),
        category: Category::Shirts,
        location: Location::North,
        quantity: 10,
        unit_price: 9.99,
    });
    doc.employees
        .push(Employee::new("e1", "Ana Torres", Location::North));
    doc.configuration.next_product_id = 2;

    store.save(&doc).unwrap();
    let loaded = store.load();

    assert_eq!(loaded.origin, LoadOrigin::Loaded);
    assert_eq!(loaded.document, doc);
}

#[test]
fn corrupt_file_is_recovered_as_empty() {
    let (_dir, store) = setup();
    fs::write(store.path(), "{ not json").unwrap();

    let loaded = store.load();
    assert_eq!(loaded.origin, LoadOrigin::Recovered);
    assert_eq!(loaded.document, Document::default());
}

#[test]
fn partial_document_fills_missing_collections() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        r#"{"products": [{"id": 3, "name": "Parka", "category": "Jackets",
            "location": "South", "quantity": 4, "unit_price": 80.0}]}"#,
    )
    .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.origin, LoadOrigin::Loaded);
    assert_eq!(loaded.document.products.len(), 1);
    assert!(loaded.document.sales.is_empty());
    assert!(loaded.document.movements.is_empty());
}

#[test]
fn save_leaves_no_temp_files() {
    let (dir, mut store) = setup();
    store.save(&Document::default()).unwrap();
    store.save(&Document::default()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["datos.json".to_string()]);
}

#[test]
fn save_with_custom_name_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("shop.json"));
    store.save(&Document::default()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["shop.json".to_string()]);
}

const SPANISH_LAYOUT: &str = r#"{
  "productos": [
    {"id": 4, "nombre": "Camisa", "categoria": "Camisas", "sede": "Norte", "cantidad": 10, "precio": 25.5}
  ],
  "ventas": [
    {"id": 2, "fecha": "2024-05-01", "cliente": "Rosa", "producto_id": 4, "cantidad": 1,
     "total": 25.5, "empleado_carnet": "E7"}
  ],
  "empleados": [
    {"carnet": "E7", "nombre": "Pilar Ruiz", "sede": "Norte", "horas_trabajadas": 40, "ventas_realizadas": 1}
  ],
  "asistencias": [
    {"empleado_carnet": "E7", "fecha": "2024-05-01", "presente": true}
  ],
  "incapacidades": [
    {"empleado_carnet": "E7", "fecha_inicio": "2024-05-10", "fecha_fin": "2024-05-12", "motivo": "gripe"}
  ],
  "movimientos": [
    {"id": 1, "fecha": "2024-04-30", "producto_id": 4, "tipo": "Entrada", "cantidad": 11, "sede": "Norte"},
    {"id": 2, "fecha": "2024-05-01", "producto_id": 4, "tipo": "Venta", "cantidad": 1, "sede": "Norte"}
  ],
  "configuracion": {"proximo_id_producto": 5, "proximo_id_venta": 3, "proximo_id_movimiento": 3}
}"#;

#[test]
fn spanish_layout_loads_with_its_data() {
    let (_dir, store) = setup();
    fs::write(store.path(), SPANISH_LAYOUT).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.origin, LoadOrigin::Loaded);
    let doc = loaded.document;
    assert_eq!(doc.products.len(), 1);
    assert_eq!(doc.products[0].name, "Camisa");
    assert_eq!(doc.products[0].location, Location::North);
    assert_eq!(doc.products[0].category, Category::Shirts);
    assert_eq!(doc.products[0].quantity, 10);
    assert_eq!(doc.sales[0].employee_badge, "E7");
    assert_eq!(doc.employees[0].sales_count, 1);
    assert_eq!(doc.employees[0].hours_worked, 40.0);
    assert!(doc.attendance[0].present);
    assert_eq!(doc.leaves[0].reason, "gripe");
    assert_eq!(doc.movements[1].kind, MovementKind::Sale);
    assert_eq!(doc.configuration.next_product_id, 5);
}

#[test]
fn spanish_layout_survives_a_mutation() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("datos.json"), SPANISH_LAYOUT).unwrap();

    let mut api = api_in(&dir);
    let result = api
        .add_product("North", "Shirts", "New", 1, 1.0)
        .unwrap();
    assert_eq!(result.affected_products[0].id, 5);
    assert_eq!(result.movements[0].id, 3);
    assert!(result
        .messages
        .iter()
        .all(|m| m.level != MessageLevel::Warning));

    let doc = FileStore::new(dir.path().join("datos.json")).load().document;
    let names: Vec<&str> = doc.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Camisa", "New"]);
    assert_eq!(doc.sales.len(), 1);
    assert_eq!(doc.movements.len(), 3);
}

#[test]
fn spanish_return_kind_is_read() {
    let (_dir, store) = setup();
    let layout = SPANISH_LAYOUT.replace("\"Venta\"", "\"Devolución\"");
    fs::write(store.path(), layout).unwrap();

    let doc = store.load().document;
    assert_eq!(doc.movements[1].kind, MovementKind::Return);
}

#[test]
fn foreign_schema_is_recovered_not_loaded() {
    let (_dir, store) = setup();
    fs::write(store.path(), r#"{"items": [{"sku": "A1", "qty": 3}]}"#).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.origin, LoadOrigin::Recovered);
    assert_eq!(loaded.document, Document::default());
}

#[test]
fn commands_on_recovered_store_carry_a_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("datos.json"), "[1, 2").unwrap();

    let mut api = api_in(&dir);
    let result = api
        .add_product("South", "Jackets", "Parka", 2, 80.0)
        .unwrap();
    assert!(result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Warning && m.content.contains("could not be read")));

    let query = api.query_stock("parka").unwrap();
    assert!(query
        .messages
        .iter()
        .all(|m| m.level != MessageLevel::Warning));
}

#[test]
fn save_creates_missing_parent_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("datos.json");
    let mut store = FileStore::new(&path);

    store.save(&Document::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn sale_and_return_survive_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = api_in(&dir);
        api.add_product("North", "Shirts", "Basic Tee", 10, 9.99)
            .unwrap();
        api.seed_employees(Roster {
            employees: vec![Employee::new("E1", "Ana Torres", Location::North)],
            ..Default::default()
        })
        .unwrap();
        let sale = api.register_sale("Luis", "e1", 1, 3).unwrap();
        assert_eq!(sale.sale().unwrap().id, 1);
    }

    let mut api = api_in(&dir);
    api.process_return(1, 2, "wrong size").unwrap();

    let doc = FileStore::new(dir.path().join("datos.json")).load().document;
    assert_eq!(doc.products[0].quantity, 9);
    assert_eq!(doc.sales[0].returned, 2);
    assert_eq!(doc.employees[0].sales_count, 1);
    let kinds: Vec<MovementKind> = doc.movements.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![MovementKind::Entry, MovementKind::Sale, MovementKind::Return]
    );

    let err = api.process_return(1, 2, "").unwrap_err();
    assert!(matches!(err, KyrelError::Conflict(_)));
}

#[test]
fn ids_keep_counting_across_restarts() {
    let dir = TempDir::new().unwrap();
    api_in(&dir)
        .add_product("South", "Jackets", "Parka", 1, 80.0)
        .unwrap();
    let result = api_in(&dir)
        .add_product("South", "Jackets", "Rain Coat", 1, 60.0)
        .unwrap();
    assert_eq!(result.affected_products[0].id, 2);
    assert_eq!(result.movements[0].id, 2);
}
