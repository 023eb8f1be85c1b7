//! Test database with the producer schema and a small seeded market

use super::connection::{create_pool, DbPool};
use crate::config::AdapterConfig;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

pub const SCHEMA: &str = r#"
CREATE TABLE issues (
    code TEXT PRIMARY KEY,
    listing_date TEXT
);

CREATE TABLE special_treatments (
    code TEXT NOT NULL,
    date TEXT NOT NULL,
    treatment TEXT NOT NULL,
    PRIMARY KEY (code, date)
);

CREATE TABLE stock_daily (
    code TEXT NOT NULL,
    date TEXT NOT NULL,
    name TEXT,
    open REAL NOT NULL,
    high REAL NOT NULL,
    low REAL NOT NULL,
    close REAL NOT NULL,
    prev_close REAL,
    change_pct REAL,
    volume INTEGER NOT NULL,
    amount REAL NOT NULL,
    turnover REAL,
    cmv REAL,
    tmv REAL,
    PRIMARY KEY (code, date)
);

CREATE TABLE adjustments (
    code TEXT NOT NULL,
    date TEXT NOT NULL,
    amount REAL NOT NULL DEFAULT 0,
    ratio REAL NOT NULL DEFAULT 0,
    record_date TEXT,
    pay_date TEXT,
    listing_date TEXT,
    PRIMARY KEY (code, date)
);
"#;

/// On-disk SQLite database living in a temporary directory
pub struct TestDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    /// Empty database with the market schema
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cswd.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        Self { _dir: dir, path }
    }

    /// Database seeded with a handful of Shanghai and Shenzhen symbols
    pub fn seeded() -> Self {
        let db = Self::new();
        seed(&db.conn());
        db
    }

    pub fn conn(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }

    pub fn config(&self) -> AdapterConfig {
        AdapterConfig {
            max_connections: 2,
            ..AdapterConfig::new(&self.path)
        }
    }

    /// Read-only pool, as the adapter uses it
    pub fn pool(&self) -> DbPool {
        create_pool(&self.config()).unwrap()
    }

    pub fn writable_pool(&self) -> DbPool {
        let config = AdapterConfig {
            read_only: false,
            ..self.config()
        };
        create_pool(&config).unwrap()
    }
}

pub fn insert_issue(conn: &Connection, code: &str, listing_date: Option<&str>) {
    conn.execute(
        "INSERT INTO issues (code, listing_date) VALUES (?1, ?2)",
        params![code, listing_date],
    )
    .unwrap();
}

pub fn insert_treatment(conn: &Connection, code: &str, date: &str, treatment: &str) {
    conn.execute(
        "INSERT INTO special_treatments (code, date, treatment) VALUES (?1, ?2, ?3)",
        params![code, date, treatment],
    )
    .unwrap();
}

/// Insert a bar; derived columns follow from `close` and `prev_close`
pub fn insert_bar(
    conn: &Connection,
    code: &str,
    date: &str,
    name: &str,
    close: f64,
    prev_close: Option<f64>,
) {
    let change_pct = prev_close.map(|p| (close - p) / p * 100.0);
    conn.execute(
        "INSERT INTO stock_daily (code, date, name, open, high, low, close, prev_close,
                                  change_pct, volume, amount, turnover, cmv, tmv)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            code,
            date,
            name,
            close,
            close * 1.02,
            close * 0.98,
            close,
            prev_close,
            change_pct,
            1_000_000i64,
            close * 1_000_000.0,
            Some(0.5f64),
            Some(close * 1.0e9),
            Some(close * 1.2e9),
        ],
    )
    .unwrap();
}

pub fn insert_adjustment(
    conn: &Connection,
    code: &str,
    date: &str,
    amount: f64,
    ratio: f64,
    record_date: Option<&str>,
    pay_date: Option<&str>,
    listing_date: Option<&str>,
) {
    conn.execute(
        "INSERT INTO adjustments (code, date, amount, ratio, record_date, pay_date, listing_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![code, date, amount, ratio, record_date, pay_date, listing_date],
    )
    .unwrap();
}

fn seed(conn: &Connection) {
    insert_issue(conn, "000001", Some("1991-04-03"));
    insert_issue(conn, "000002", Some("1991-01-29"));
    insert_issue(conn, "000003", Some("1991-01-14"));
    insert_issue(conn, "000004", Some("1991-01-14"));
    insert_issue(conn, "000333", Some("2013-09-18"));
    insert_issue(conn, "600000", Some("1999-11-10"));
    insert_issue(conn, "600001", Some("1998-01-22"));
    // listing date not yet published
    insert_issue(conn, "603999", None);

    insert_treatment(conn, "000002", "2008-05-05", "ST");
    insert_treatment(conn, "000003", "2001-04-27", "ST");
    insert_treatment(conn, "000003", "2001-06-05", "PT");
    insert_treatment(conn, "000003", "2002-06-14", "delisting");
    insert_treatment(conn, "000004", "2006-04-28", "PT");
    insert_treatment(conn, "000004", "2007-03-20", "resume");
    insert_treatment(conn, "600001", "2009-12-29", "delisting");

    insert_bar(conn, "000001", "2018-04-13", "平安银行", 11.26, None);
    insert_bar(conn, "000001", "2018-04-16", "平安银行", 11.04, Some(11.26));

    insert_bar(conn, "000002", "2018-04-13", "万 科Ａ", 31.48, None);
    insert_bar(conn, "000002", "2018-04-16", "万科A", 30.20, Some(31.48));

    insert_bar(conn, "000003", "2002-04-25", "PT金田Ａ", 2.10, None);
    insert_bar(conn, "000003", "2002-04-26", "PT金田Ａ", 2.05, Some(2.10));

    insert_bar(conn, "000004", "2006-04-27", "ST国农", 4.30, None);

    for (date, close, prev) in [
        ("2018-03-30", 54.53, None),
        ("2018-04-02", 52.84, Some(54.53)),
        ("2018-04-03", 52.52, Some(52.84)),
        ("2018-04-04", 53.01, Some(52.52)),
        ("2018-04-09", 51.30, Some(53.01)),
        ("2018-04-16", 49.79, Some(51.32)),
        ("2018-04-17", 50.10, Some(49.79)),
    ] {
        insert_bar(conn, "000333", date, "美的集团", close, prev);
    }

    // traded but missing from issues
    insert_bar(conn, "300750", "2018-06-11", "宁德时代", 36.17, None);
    insert_bar(conn, "300750", "2018-06-12", "宁德时代", 39.79, Some(36.17));

    insert_bar(conn, "600000", "2018-04-16", "浦发银行", 11.49, None);

    insert_adjustment(
        conn,
        "600000",
        "2009-06-09",
        0.23,
        0.0,
        Some("2009-06-08"),
        Some("2009-06-09"),
        None,
    );
    insert_adjustment(
        conn,
        "600000",
        "2010-06-10",
        0.15,
        0.3,
        Some("2010-06-09"),
        Some("2010-06-11"),
        Some("2010-06-10"),
    );
    insert_adjustment(
        conn,
        "600000",
        "2011-06-03",
        0.16,
        0.3,
        Some("2011-06-02"),
        Some("2011-06-07"),
        Some("2011-06-03"),
    );
    insert_adjustment(
        conn,
        "600000",
        "2017-05-25",
        0.2,
        0.3,
        Some("2017-05-24"),
        Some("2017-05-26"),
        Some("2017-05-25"),
    );
    insert_adjustment(
        conn,
        "000333",
        "2018-05-03",
        1.2,
        0.0,
        Some("2018-05-02"),
        Some("2018-05-03"),
        None,
    );
}
