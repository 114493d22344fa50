//! Tutorial dataset — North-American numbering plan sample.
//!
//! Each CSV record (`npa,nxx,lat,lng,state,city`) is written to three column
//! families:
//!
//! | column family | row key        | column name     | value  |
//! |---------------|----------------|-----------------|--------|
//! | `Npanxx`      | `npa` + `nxx`  | city/state/lat/lng | field |
//! | `StateCity`   | `"TX Austin"`  | `nxx`           | `npa`  |
//! | `AreaCode`    | `npa`          | `"Austin__202"` | `state`|
//!
//! `Npanxx` carries secondary indexes on `state` and `city`.

use crate::error::TutorialResult;
use crate::storage::{ColumnStore, KeyspaceStore};
use serde::Deserialize;
use std::io::Read;
use std::sync::Arc;
use tracing::info;

/// Column family keyed by area code + exchange.
pub const NPANXX: &str = "Npanxx";
/// Column family keyed by `"<state> <city>"`.
pub const STATE_CITY: &str = "StateCity";
/// Column family keyed by area code.
pub const AREA_CODE: &str = "AreaCode";

/// Bundled sample records.
pub const NPANXX_CSV: &str = include_str!("../data/npanxx.csv");

/// 데이터셋 CSV 레코드
#[derive(Debug, Deserialize)]
struct NpanxxRecord {
    npa: String,
    nxx: String,
    lat: String,
    lng: String,
    state: String,
    city: String,
}

/// Build a store holding `keyspace` seeded with the bundled records.
pub fn open_tutorial_store(keyspace: &str) -> TutorialResult<Arc<ColumnStore>> {
    let store = Arc::new(ColumnStore::new());
    load_records(&store, keyspace, NPANXX_CSV.as_bytes())?;
    Ok(store)
}

/// Create `keyspace` with the three tutorial column families and load
/// records from a CSV reader. Returns the number of records loaded.
pub fn load_records<R: Read>(store: &ColumnStore, keyspace: &str, reader: R) -> TutorialResult<usize> {
    let ks = store.create_keyspace(keyspace)?;
    create_schema(&ks)?;

    let npanxx = ks.column_family(NPANXX)?;
    let state_city = ks.column_family(STATE_CITY)?;
    let area_code = ks.column_family(AREA_CODE)?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loaded = 0;
    for record in reader.deserialize() {
        let record: NpanxxRecord = record?;
        let npanxx_key = format!("{}{}", record.npa, record.nxx);

        npanxx.insert(&npanxx_key, "city", &record.city)?;
        npanxx.insert(&npanxx_key, "state", &record.state)?;
        npanxx.insert(&npanxx_key, "lat", &record.lat)?;
        npanxx.insert(&npanxx_key, "lng", &record.lng)?;

        let state_city_key = format!("{} {}", record.state, record.city);
        state_city.insert(&state_city_key, &record.nxx, &record.npa)?;

        let area_code_column = format!("{}__{}", record.city, record.nxx);
        area_code.insert(&record.npa, &area_code_column, &record.state)?;

        loaded += 1;
    }

    info!(
        keyspace = %keyspace,
        records = loaded,
        npanxx_rows = npanxx.row_count(),
        state_city_rows = state_city.row_count(),
        area_code_rows = area_code.row_count(),
        "Loaded tutorial dataset"
    );
    Ok(loaded)
}

fn create_schema(ks: &KeyspaceStore) -> TutorialResult<()> {
    let npanxx = ks.create_column_family(NPANXX)?;
    npanxx.create_index("state")?;
    npanxx.create_index("city")?;
    ks.create_column_family(STATE_CITY)?;
    ks.create_column_family(AREA_CODE)?;
    Ok(())
}
