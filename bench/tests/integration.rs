//! Integration tests: verify schema creation, round trips, and benchmark phases.

use countryset_bench::config::BenchConfig;
use countryset_bench::populate::{generate_test_data, rng_from_seed};
use countryset_bench::runner::{bench_reads, bench_scans, bench_writes, verify};
use countryset_bench::schema::bitset::BitsetSchema;
use countryset_bench::schema::json::JsonSchema;
use countryset_bench::schema::{open_connection, BenchSchema, Column};
use cs_core::{Countries, Country};
use rusqlite::Connection;

fn small_config() -> BenchConfig {
    BenchConfig {
        iterations: 2,
        rows: 25,
        seed: Some(0xC0FFEE),
        ..BenchConfig::default()
    }
}

fn setup(schema: &dyn BenchSchema) -> Connection {
    let conn = open_connection(None).expect("open");
    schema.create_tables(&conn).expect("create_tables");
    conn
}

fn sample_rows() -> Vec<Countries> {
    vec![
        Countries::from(vec![Country::AD, Country::FR, Country::AG, Country::NU]),
        Countries::new(),
        Countries::from(vec![Country::ZW, Country::ZW, Country::AF]),
        Country::all().collect(),
    ]
}

fn assert_round_trip(schema: &dyn BenchSchema) {
    let conn = setup(schema);
    let rows = sample_rows();
    schema.write_rows(&conn, &rows).unwrap();
    assert_eq!(schema.row_count(&conn).unwrap(), rows.len() as u64);

    for (i, expected) in rows.iter().enumerate() {
        let actual = schema.read_row(&conn, i as u64 + 1).unwrap();
        assert_eq!(&actual, expected, "row {}", i + 1);
    }

    let all = schema.read_all(&conn).unwrap();
    let ids: Vec<u64> = all.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    let read: Vec<Countries> = all.into_iter().map(|(_, c)| c).collect();
    verify(schema, &rows, &read).unwrap();
}

// ── Bitset schema tests ─────────────────────────────────────────────

#[test]
fn bitset_round_trip() {
    assert_round_trip(&BitsetSchema::new());
}

#[test]
fn bitset_stores_exactly_32_bytes() {
    let schema = BitsetSchema::new();
    let conn = setup(&schema);
    schema
        .write_rows(&conn, &[Countries::from(vec![Country::FR])])
        .unwrap();

    let blob: Vec<u8> = conn
        .query_row("SELECT countries FROM countries_bitset WHERE id = 1", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(blob.len(), 32);
    // FR = 76 → word 1, bit 12 → byte 8 + (7 - 12 / 8) = 14, value 1 << (12 % 8)
    let mut expected = [0u8; 32];
    expected[14] = 1 << 4;
    assert_eq!(blob, expected.to_vec());
}

#[test]
fn bitset_rejects_wrong_size_blob() {
    let schema = BitsetSchema::new();
    let conn = Connection::open_in_memory().unwrap();
    // No length check on this table so a malformed value can be planted.
    conn.execute_batch(
        "CREATE TABLE countries_bitset (id INTEGER PRIMARY KEY, countries BLOB);
         INSERT INTO countries_bitset (id, countries) VALUES (1, x'0102');
         INSERT INTO countries_bitset (id, countries) VALUES (2, 'text');",
    )
    .unwrap();

    assert!(schema.read_row(&conn, 1).is_err());
    assert!(schema.read_row(&conn, 2).is_err());

    let direct: rusqlite::Result<Column<Countries>> = conn.query_row(
        "SELECT countries FROM countries_bitset WHERE id = 1",
        [],
        |r| r.get(0),
    );
    assert!(direct.is_err());
}

#[test]
fn bitset_table_check_rejects_wrong_length() {
    let schema = BitsetSchema::new();
    let conn = setup(&schema);
    let res = conn.execute(
        "INSERT INTO countries_bitset (countries) VALUES (x'00')",
        [],
    );
    assert!(res.is_err());
}

#[test]
fn bitset_preserves_bits_past_domain() {
    let schema = BitsetSchema::new();
    let conn = setup(&schema);
    conn.execute(
        "INSERT INTO countries_bitset (countries) VALUES (?1)",
        [vec![0xFFu8; 32]],
    )
    .unwrap();

    let countries = schema.read_row(&conn, 1).unwrap();
    assert_eq!(countries.len(), 256);
    assert_eq!(countries.encode(), [0xFF; 32]);
}

// ── JSON schema tests ───────────────────────────────────────────────

#[test]
fn json_round_trip() {
    assert_round_trip(&JsonSchema::new());
}

#[test]
fn json_stores_codes() {
    let schema = JsonSchema::new();
    let conn = setup(&schema);
    schema
        .write_rows(&conn, &[Countries::from(vec![Country::AD, Country::FR])])
        .unwrap();
    let text: String = conn
        .query_row("SELECT countries FROM countries_json WHERE id = 1", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(text, "[5,76]");
}

// ── Shared behaviour ────────────────────────────────────────────────

#[test]
fn clear_restarts_ids() {
    for schema in [&BitsetSchema::new() as &dyn BenchSchema, &JsonSchema::new()] {
        let conn = setup(schema);
        schema.write_rows(&conn, &sample_rows()).unwrap();
        schema.clear(&conn).unwrap();
        assert_eq!(schema.row_count(&conn).unwrap(), 0);

        schema
            .write_rows(&conn, &[Countries::from(vec![Country::US])])
            .unwrap();
        let countries = schema.read_row(&conn, 1).unwrap();
        assert_eq!(countries, Countries::from(vec![Country::US]));
    }
}

#[test]
fn missing_row_is_an_error() {
    for schema in [&BitsetSchema::new() as &dyn BenchSchema, &JsonSchema::new()] {
        let conn = setup(schema);
        assert!(schema.read_row(&conn, 1).is_err());
    }
}

#[test]
fn random_data_round_trips() {
    let data = generate_test_data(200, &mut rng_from_seed(Some(99)));
    for schema in [&BitsetSchema::new() as &dyn BenchSchema, &JsonSchema::new()] {
        let conn = setup(schema);
        schema.write_rows(&conn, &data).unwrap();
        let read: Vec<Countries> = schema
            .read_all(&conn)
            .unwrap()
            .into_iter()
            .map(|(_, c)| c)
            .collect();
        verify(schema, &data, &read).unwrap();
    }
}

#[test]
fn verify_detects_mismatch() {
    let schema = BitsetSchema::new();
    let written = vec![Countries::from(vec![Country::FR])];
    let read = vec![Countries::from(vec![Country::DE])];
    assert!(verify(&schema, &written, &read).is_err());
    assert!(verify(&schema, &written, &[]).is_err());
}

#[test]
fn phases_record_one_sample_per_iteration() {
    let config = small_config();
    let mut rng = rng_from_seed(config.seed);
    for schema in [&BitsetSchema::new() as &dyn BenchSchema, &JsonSchema::new()] {
        let conn = setup(schema);

        let writes = bench_writes(&conn, schema, &config, &mut rng).unwrap();
        assert_eq!(writes.len(), config.iterations);
        assert_eq!(writes.name(), schema.name());
        assert_eq!(schema.row_count(&conn).unwrap(), config.rows as u64);

        let reads = bench_reads(&conn, schema, &config, &mut rng).unwrap();
        assert_eq!(reads.len(), config.iterations);

        let scans = bench_scans(&conn, schema, &config, &mut rng).unwrap();
        assert_eq!(scans.len(), config.iterations);
        assert_eq!(schema.row_count(&conn).unwrap(), config.rows as u64);
    }
}

#[test]
fn json_refuses_sets_with_bits_past_domain() {
    let bitset = BitsetSchema::new();
    let json = JsonSchema::new();
    let conn = setup(&bitset);
    json.create_tables(&conn).unwrap();
    conn.execute(
        "INSERT INTO countries_bitset (countries) VALUES (?1)",
        [vec![0xFFu8; 32]],
    )
    .unwrap();

    let decoded = bitset.read_row(&conn, 1).unwrap();
    let ok = Countries::from(vec![Country::FR]);
    assert!(json.write_rows(&conn, &[ok, decoded]).is_err());
    // The failed batch is rolled back, so nothing unreadable was stored.
    assert_eq!(json.row_count(&conn).unwrap(), 0);
}
