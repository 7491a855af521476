// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL keywords
//!
//! [`RESERVED`] lists words that need quoting when used as identifiers,
//! [`KEYWORDS`] the non-reserved keywords. A word may move from one table to
//! the other between versions.

use unified_sql_ir::{CapabilityEntry, CapabilityTable};

type Kw = CapabilityEntry<&'static str>;

#[rustfmt::skip]
pub const RESERVED: CapabilityTable<&'static str> = &[
    Kw::always("ADD"), Kw::always("ALL"), Kw::always("ALTER"), Kw::always("ANALYZE"),
    Kw::always("AND"), Kw::always("AS"), Kw::always("ASC"), Kw::always("ASENSITIVE"),
    Kw::always("BEFORE"), Kw::always("BETWEEN"), Kw::always("BIGINT"), Kw::always("BINARY"),
    Kw::always("BLOB"), Kw::always("BOTH"), Kw::always("BY"), Kw::always("CALL"),
    Kw::always("CASCADE"), Kw::always("CASE"), Kw::always("CHANGE"), Kw::always("CHAR"),
    Kw::always("CHARACTER"), Kw::always("CHECK"), Kw::always("COLLATE"), Kw::always("COLUMN"),
    Kw::always("CONDITION"), Kw::always("CONSTRAINT"), Kw::always("CONTINUE"), Kw::always("CONVERT"),
    Kw::always("CREATE"), Kw::always("CROSS"), Kw::always("CURRENT_DATE"), Kw::always("CURRENT_TIME"),
    Kw::always("CURRENT_TIMESTAMP"), Kw::always("CURRENT_USER"), Kw::always("CURSOR"), Kw::always("DATABASE"),
    Kw::always("DATABASES"), Kw::always("DAY_HOUR"), Kw::always("DAY_MICROSECOND"), Kw::always("DAY_MINUTE"),
    Kw::always("DAY_SECOND"), Kw::always("DEC"), Kw::always("DECIMAL"), Kw::always("DECLARE"),
    Kw::always("DEFAULT"), Kw::always("DELAYED"), Kw::always("DELETE"), Kw::always("DESC"),
    Kw::always("DESCRIBE"), Kw::always("DETERMINISTIC"), Kw::always("DISTINCT"), Kw::always("DISTINCTROW"),
    Kw::always("DIV"), Kw::always("DOUBLE"), Kw::always("DROP"), Kw::always("DUAL"),
    Kw::always("EACH"), Kw::always("ELSE"), Kw::always("ELSEIF"), Kw::always("ENCLOSED"),
    Kw::always("ESCAPED"), Kw::always("EXISTS"), Kw::always("EXIT"), Kw::always("EXPLAIN"),
    Kw::always("FALSE"), Kw::always("FETCH"), Kw::always("FLOAT"), Kw::always("FLOAT4"),
    Kw::always("FLOAT8"), Kw::always("FOR"), Kw::always("FORCE"), Kw::always("FOREIGN"),
    Kw::always("FROM"), Kw::always("FULLTEXT"), Kw::always("GRANT"), Kw::always("GROUP"),
    Kw::always("HAVING"), Kw::always("HIGH_PRIORITY"), Kw::always("HOUR_MICROSECOND"), Kw::always("HOUR_MINUTE"),
    Kw::always("HOUR_SECOND"), Kw::always("IF"), Kw::always("IGNORE"), Kw::always("IN"),
    Kw::always("INDEX"), Kw::always("INFILE"), Kw::always("INNER"), Kw::always("INOUT"),
    Kw::always("INSENSITIVE"), Kw::always("INSERT"), Kw::always("INT"), Kw::always("INT1"),
    Kw::always("INT2"), Kw::always("INT3"), Kw::always("INT4"), Kw::always("INT8"),
    Kw::always("INTEGER"), Kw::always("INTERVAL"), Kw::always("INTO"), Kw::always("IS"),
    Kw::always("ITERATE"), Kw::always("JOIN"), Kw::always("KEY"), Kw::always("KEYS"),
    Kw::always("KILL"), Kw::always("LEADING"), Kw::always("LEAVE"), Kw::always("LEFT"),
    Kw::always("LIKE"), Kw::always("LIMIT"), Kw::always("LINES"), Kw::always("LOAD"),
    Kw::always("LOCALTIME"), Kw::always("LOCALTIMESTAMP"), Kw::always("LOCK"), Kw::always("LONG"),
    Kw::always("LONGBLOB"), Kw::always("LONGTEXT"), Kw::always("LOOP"), Kw::always("LOW_PRIORITY"),
    Kw::always("MATCH"), Kw::always("MEDIUMBLOB"), Kw::always("MEDIUMINT"), Kw::always("MEDIUMTEXT"),
    Kw::always("MIDDLEINT"), Kw::always("MINUTE_MICROSECOND"), Kw::always("MINUTE_SECOND"), Kw::always("MOD"),
    Kw::always("MODIFIES"), Kw::always("NATURAL"), Kw::always("NOT"), Kw::always("NO_WRITE_TO_BINLOG"),
    Kw::always("NULL"), Kw::always("NUMERIC"), Kw::always("ON"), Kw::always("OPTIMIZE"),
    Kw::always("OPTION"), Kw::always("OPTIONALLY"), Kw::always("OR"), Kw::always("ORDER"),
    Kw::always("OUT"), Kw::always("OUTER"), Kw::always("OUTFILE"), Kw::always("PRECISION"),
    Kw::always("PRIMARY"), Kw::always("PROCEDURE"), Kw::always("PURGE"), Kw::always("READ"),
    Kw::always("READS"), Kw::always("REAL"), Kw::always("REFERENCES"), Kw::always("REGEXP"),
    Kw::always("RELEASE"), Kw::always("RENAME"), Kw::always("REPEAT"), Kw::always("REPLACE"),
    Kw::always("REQUIRE"), Kw::always("RESTRICT"), Kw::always("RETURN"), Kw::always("REVOKE"),
    Kw::always("RIGHT"), Kw::always("RLIKE"), Kw::always("SCHEMA"), Kw::always("SCHEMAS"),
    Kw::always("SECOND_MICROSECOND"), Kw::always("SELECT"), Kw::always("SENSITIVE"), Kw::always("SEPARATOR"),
    Kw::always("SET"), Kw::always("SHOW"), Kw::always("SMALLINT"), Kw::always("SPATIAL"),
    Kw::always("SPECIFIC"), Kw::always("SQL"), Kw::always("SQLEXCEPTION"), Kw::always("SQLSTATE"),
    Kw::always("SQLWARNING"), Kw::always("SQL_BIG_RESULT"), Kw::always("SQL_CALC_FOUND_ROWS"), Kw::always("SQL_SMALL_RESULT"),
    Kw::always("SSL"), Kw::always("STARTING"), Kw::always("STRAIGHT_JOIN"), Kw::always("TABLE"),
    Kw::always("TERMINATED"), Kw::always("THEN"), Kw::always("TINYBLOB"), Kw::always("TINYINT"),
    Kw::always("TINYTEXT"), Kw::always("TO"), Kw::always("TRAILING"), Kw::always("TRIGGER"),
    Kw::always("TRUE"), Kw::always("UNDO"), Kw::always("UNION"), Kw::always("UNIQUE"),
    Kw::always("UNLOCK"), Kw::always("UNSIGNED"), Kw::always("UPDATE"), Kw::always("USAGE"),
    Kw::always("USE"), Kw::always("USING"), Kw::always("UTC_DATE"), Kw::always("UTC_TIME"),
    Kw::always("UTC_TIMESTAMP"), Kw::always("VALUES"), Kw::always("VARBINARY"), Kw::always("VARCHAR"),
    Kw::always("VARCHARACTER"), Kw::always("VARYING"), Kw::always("WHEN"), Kw::always("WHERE"),
    Kw::always("WHILE"), Kw::always("WITH"), Kw::always("WRITE"), Kw::always("XOR"),
    Kw::always("YEAR_MONTH"), Kw::always("ZEROFILL"),
    // added
    Kw::since("ACCESSIBLE", 50100),
    Kw::since("LINEAR", 50100),
    Kw::since("RANGE", 50100),
    Kw::since("READ_WRITE", 50100),
    Kw::since("MAXVALUE", 50500),
    Kw::since("RESIGNAL", 50500),
    Kw::since("SIGNAL", 50500),
    Kw::since("PARTITION", 50600),
    Kw::since("GET", 50604),
    Kw::since("IO_AFTER_GTIDS", 50605),
    Kw::since("IO_BEFORE_GTIDS", 50605),
    Kw::since("GENERATED", 50706),
    Kw::since("OPTIMIZER_COSTS", 50706),
    Kw::since("STORED", 50706),
    Kw::since("VIRTUAL", 50706),
    Kw::since("CUBE", 80001),
    Kw::since("FUNCTION", 80001),
    Kw::since("GROUPING", 80001),
    Kw::since("OF", 80001),
    Kw::since("RECURSIVE", 80001),
    Kw::since("CUME_DIST", 80002),
    Kw::since("DENSE_RANK", 80002),
    Kw::since("FIRST_VALUE", 80002),
    Kw::since("GROUPS", 80002),
    Kw::since("LAG", 80002),
    Kw::since("LAST_VALUE", 80002),
    Kw::since("LEAD", 80002),
    Kw::since("NTH_VALUE", 80002),
    Kw::since("NTILE", 80002),
    Kw::since("OVER", 80002),
    Kw::since("PERCENT_RANK", 80002),
    Kw::since("RANK", 80002),
    Kw::since("ROW", 80002),
    Kw::since("ROWS", 80002),
    Kw::since("ROW_NUMBER", 80002),
    Kw::since("WINDOW", 80002),
    Kw::since("SYSTEM", 80003),
    Kw::since("EMPTY", 80004),
    Kw::since("JSON_TABLE", 80004),
    Kw::since("LATERAL", 80014),
    Kw::since("EXCEPT", 80031),
    Kw::since("INTERSECT", 80031),
    Kw::since("MANUAL", 80400),
    Kw::since("PARALLEL", 80400),
    Kw::since("QUALIFY", 80400),
    Kw::since("TABLESAMPLE", 80400),
    // reserved for a while
    Kw::between("MASTER_SSL_VERIFY_SERVER_CERT", 50100, 80399),
    Kw::between("MASTER_BIND", 50606, 80399),
    Kw::between("READ_ONLY", 50100, 50599),
    Kw::between("GENERAL", 50500, 50599),
    Kw::between("IGNORE_SERVER_IDS", 50500, 50599),
    Kw::between("MASTER_HEARTBEAT_PERIOD", 50500, 50599),
    Kw::between("SLOW", 50500, 50599),
    Kw::between("PARSE_GCOL_EXPR", 50706, 79999),
    // removed
    Kw::until("ONE_SHOT", 50599),
    Kw::until("ANALYSE", 79999),
    Kw::until("MASTER_SERVER_ID", 79999),
    Kw::until("REDOFILE", 79999),
    Kw::until("DES_KEY_FILE", 80002),
    Kw::until("SQL_CACHE", 80002),
];

#[rustfmt::skip]
pub const KEYWORDS: CapabilityTable<&'static str> = &[
    Kw::always("ACTION"), Kw::always("AFTER"), Kw::always("AGAINST"), Kw::always("AGGREGATE"),
    Kw::always("ALGORITHM"), Kw::always("ANY"), Kw::always("AT"), Kw::always("AUTO_INCREMENT"),
    Kw::always("AUTOEXTEND_SIZE"), Kw::always("AVG"), Kw::always("AVG_ROW_LENGTH"), Kw::always("BACKUP"),
    Kw::always("BEGIN"), Kw::always("BINLOG"), Kw::always("BIT"), Kw::always("BLOCK"),
    Kw::always("BOOL"), Kw::always("BOOLEAN"), Kw::always("BTREE"), Kw::always("BYTE"),
    Kw::always("CACHE"), Kw::always("CASCADED"), Kw::always("CATALOG_NAME"), Kw::always("CHAIN"),
    Kw::always("CHANGED"), Kw::always("CHARSET"), Kw::always("CHECKSUM"), Kw::always("CIPHER"),
    Kw::always("CLASS_ORIGIN"), Kw::always("CLIENT"), Kw::always("CLOSE"), Kw::always("COALESCE"),
    Kw::always("CODE"), Kw::always("COLLATION"), Kw::always("COLUMNS"), Kw::always("COLUMN_NAME"),
    Kw::always("COMMENT"), Kw::always("COMMIT"), Kw::always("COMMITTED"), Kw::always("COMPACT"),
    Kw::always("COMPLETION"), Kw::always("COMPRESSED"), Kw::always("CONCURRENT"), Kw::always("CONNECTION"),
    Kw::always("CONSISTENT"), Kw::always("CONSTRAINT_CATALOG"), Kw::always("CONSTRAINT_NAME"), Kw::always("CONSTRAINT_SCHEMA"),
    Kw::always("CONTAINS"), Kw::always("CONTEXT"), Kw::always("CPU"), Kw::always("CURSOR_NAME"),
    Kw::always("DATA"), Kw::always("DATAFILE"), Kw::always("DATE"), Kw::always("DATETIME"),
    Kw::always("DAY"), Kw::always("DEALLOCATE"), Kw::always("DEFINER"), Kw::always("DELAY_KEY_WRITE"),
    Kw::always("DIRECTORY"), Kw::always("DISABLE"), Kw::always("DISCARD"), Kw::always("DISK"),
    Kw::always("DO"), Kw::always("DUMPFILE"), Kw::always("DUPLICATE"), Kw::always("DYNAMIC"),
    Kw::always("ENABLE"), Kw::always("END"), Kw::always("ENDS"), Kw::always("ENGINE"),
    Kw::always("ENGINES"), Kw::always("ENUM"), Kw::always("ERROR"), Kw::always("ERRORS"),
    Kw::always("ESCAPE"), Kw::always("EVENT"), Kw::always("EVENTS"), Kw::always("EVERY"),
    Kw::always("EXECUTE"), Kw::always("EXPANSION"), Kw::always("EXTENDED"), Kw::always("EXTENT_SIZE"),
    Kw::always("FAST"), Kw::always("FAULTS"), Kw::always("FIELDS"), Kw::always("FILE"),
    Kw::always("FIRST"), Kw::always("FIXED"), Kw::always("FLUSH"), Kw::always("FOUND"),
    Kw::always("FULL"), Kw::always("FUNCTION"), Kw::always("GEOMETRY"), Kw::always("GEOMETRYCOLLECTION"),
    Kw::always("GET_FORMAT"), Kw::always("GLOBAL"), Kw::always("GRANTS"), Kw::always("HANDLER"),
    Kw::always("HASH"), Kw::always("HELP"), Kw::always("HOST"), Kw::always("HOSTS"),
    Kw::always("HOUR"), Kw::always("IDENTIFIED"), Kw::always("IMPORT"), Kw::always("INDEXES"),
    Kw::always("INITIAL_SIZE"), Kw::always("INSERT_METHOD"), Kw::always("INVOKER"), Kw::always("IO"),
    Kw::always("IPC"), Kw::always("ISOLATION"), Kw::always("ISSUER"), Kw::always("KEY_BLOCK_SIZE"),
    Kw::always("LANGUAGE"), Kw::always("LAST"), Kw::always("LEAVES"), Kw::always("LESS"),
    Kw::always("LEVEL"), Kw::always("LINESTRING"), Kw::always("LIST"), Kw::always("LOCAL"),
    Kw::always("LOCKS"), Kw::always("LOGFILE"), Kw::always("LOGS"), Kw::always("MASTER_CONNECT_RETRY"),
    Kw::always("MASTER_HOST"), Kw::always("MASTER_LOG_FILE"), Kw::always("MASTER_LOG_POS"), Kw::always("MASTER_PASSWORD"),
    Kw::always("MASTER_PORT"), Kw::always("MASTER_USER"), Kw::always("MAX_CONNECTIONS_PER_HOUR"), Kw::always("MAX_QUERIES_PER_HOUR"),
    Kw::always("MAX_ROWS"), Kw::always("MAX_SIZE"), Kw::always("MAX_UPDATES_PER_HOUR"), Kw::always("MAX_USER_CONNECTIONS"),
    Kw::always("MEDIUM"), Kw::always("MEMORY"), Kw::always("MERGE"), Kw::always("MESSAGE_TEXT"),
    Kw::always("MICROSECOND"), Kw::always("MIGRATE"), Kw::always("MINUTE"), Kw::always("MIN_ROWS"),
    Kw::always("MODE"), Kw::always("MODIFY"), Kw::always("MONTH"), Kw::always("MULTILINESTRING"),
    Kw::always("MULTIPOINT"), Kw::always("MULTIPOLYGON"), Kw::always("MUTEX"), Kw::always("MYSQL_ERRNO"),
    Kw::always("NAME"), Kw::always("NAMES"), Kw::always("NATIONAL"), Kw::always("NCHAR"),
    Kw::always("NDB"), Kw::always("NDBCLUSTER"), Kw::always("NEW"), Kw::always("NEXT"),
    Kw::always("NO"), Kw::always("NODEGROUP"), Kw::always("NONE"), Kw::always("NVARCHAR"),
    Kw::always("OFFSET"), Kw::always("ONE"), Kw::always("OPEN"), Kw::always("OPTIONS"),
    Kw::always("OWNER"), Kw::always("PACK_KEYS"), Kw::always("PAGE"), Kw::always("PARSER"),
    Kw::always("PARTIAL"), Kw::always("PARTITIONING"), Kw::always("PARTITIONS"), Kw::always("PASSWORD"),
    Kw::always("PHASE"), Kw::always("PLUGIN"), Kw::always("PLUGINS"), Kw::always("POINT"),
    Kw::always("POLYGON"), Kw::always("PORT"), Kw::always("PREPARE"), Kw::always("PRESERVE"),
    Kw::always("PREV"), Kw::always("PRIVILEGES"), Kw::always("PROCESSLIST"), Kw::always("PROFILE"),
    Kw::always("PROFILES"), Kw::always("PROXY"), Kw::always("QUARTER"), Kw::always("QUERY"),
    Kw::always("QUICK"), Kw::always("REBUILD"), Kw::always("RECOVER"), Kw::always("REDUNDANT"),
    Kw::always("RELAY"), Kw::always("RELAY_LOG_FILE"), Kw::always("RELAY_LOG_POS"), Kw::always("RELAYLOG"),
    Kw::always("RELOAD"), Kw::always("REMOVE"), Kw::always("REORGANIZE"), Kw::always("REPAIR"),
    Kw::always("REPEATABLE"), Kw::always("REPLICATION"), Kw::always("RESET"), Kw::always("RESTORE"),
    Kw::always("RESUME"), Kw::always("RETURNS"), Kw::always("REVERSE"), Kw::always("ROLLBACK"),
    Kw::always("ROLLUP"), Kw::always("ROUTINE"), Kw::always("ROW_FORMAT"), Kw::always("RTREE"),
    Kw::always("SAVEPOINT"), Kw::always("SCHEDULE"), Kw::always("SCHEMA_NAME"), Kw::always("SECOND"),
    Kw::always("SECURITY"), Kw::always("SERIAL"), Kw::always("SERIALIZABLE"), Kw::always("SERVER"),
    Kw::always("SESSION"), Kw::always("SHARE"), Kw::always("SHUTDOWN"), Kw::always("SIGNED"),
    Kw::always("SIMPLE"), Kw::always("SNAPSHOT"), Kw::always("SOCKET"), Kw::always("SOME"),
    Kw::always("SONAME"), Kw::always("SOUNDS"), Kw::always("SOURCE"), Kw::always("SQL_BUFFER_RESULT"),
    Kw::always("SQL_THREAD"), Kw::always("START"), Kw::always("STARTS"), Kw::always("STATUS"),
    Kw::always("STOP"), Kw::always("STORAGE"), Kw::always("STRING"), Kw::always("SUBCLASS_ORIGIN"),
    Kw::always("SUBJECT"), Kw::always("SUBPARTITION"), Kw::always("SUBPARTITIONS"), Kw::always("SUPER"),
    Kw::always("SUSPEND"), Kw::always("SWAPS"), Kw::always("SWITCHES"), Kw::always("TABLES"),
    Kw::always("TABLESPACE"), Kw::always("TABLE_NAME"), Kw::always("TEMPORARY"), Kw::always("TEMPTABLE"),
    Kw::always("TEXT"), Kw::always("THAN"), Kw::always("TIME"), Kw::always("TIMESTAMP"),
    Kw::always("TIMESTAMPADD"), Kw::always("TIMESTAMPDIFF"), Kw::always("TRANSACTION"), Kw::always("TRIGGERS"),
    Kw::always("TRUNCATE"), Kw::always("TYPE"), Kw::always("TYPES"), Kw::always("UNCOMMITTED"),
    Kw::always("UNDEFINED"), Kw::always("UNDOFILE"), Kw::always("UNDO_BUFFER_SIZE"), Kw::always("UNICODE"),
    Kw::always("UNKNOWN"), Kw::always("UNTIL"), Kw::always("UPGRADE"), Kw::always("USER"),
    Kw::always("USER_RESOURCES"), Kw::always("VALUE"), Kw::always("VARIABLES"), Kw::always("VIEW"),
    Kw::always("WAIT"), Kw::always("WARNINGS"), Kw::always("WEEK"), Kw::always("WORK"),
    Kw::always("WRAPPER"), Kw::always("X509"), Kw::always("XA"), Kw::always("XML"),
    Kw::always("YEAR"),
    // added
    Kw::since("SLOW", 50600),
    Kw::since("GENERAL", 50600),
    Kw::since("IGNORE_SERVER_IDS", 50600),
    Kw::since("MASTER_HEARTBEAT_PERIOD", 50600),
    Kw::since("READ_ONLY", 50600),
    Kw::since("EXCHANGE", 50600),
    Kw::since("EXPORT", 50606),
    Kw::since("STACKED", 50600),
    Kw::since("DIAGNOSTICS", 50600),
    Kw::since("MASTER_AUTO_POSITION", 50605),
    Kw::since("MASTER_DELAY", 50602),
    Kw::since("SQL_AFTER_GTIDS", 50605),
    Kw::since("SQL_BEFORE_GTIDS", 50605),
    Kw::since("ALWAYS", 50706),
    Kw::since("CHANNEL", 50706),
    Kw::since("COMPRESSION", 50708),
    Kw::since("ENCRYPTION", 50711),
    Kw::since("FILE_BLOCK_SIZE", 50706),
    Kw::since("FILTER", 50706),
    Kw::since("FOLLOWS", 50702),
    Kw::since("PRECEDES", 50702),
    Kw::since("GROUP_REPLICATION", 50706),
    Kw::since("INSTANCE", 50711),
    Kw::since("JSON", 50708),
    Kw::since("NEVER", 50704),
    Kw::since("REPLICATE_DO_DB", 50706),
    Kw::since("ROTATE", 50711),
    Kw::since("STATS_PERSISTENT", 50602),
    Kw::since("VALIDATION", 50705),
    Kw::since("WITHOUT", 50705),
    Kw::since("XID", 50707),
    Kw::since("ACTIVE", 80014),
    Kw::since("ADMIN", 80000),
    Kw::since("BUCKETS", 80002),
    Kw::since("CLONE", 80003),
    Kw::since("COMPONENT", 80000),
    Kw::since("CURRENT", 80002),
    Kw::since("DEFINITION", 80004),
    Kw::since("DESCRIPTION", 80004),
    Kw::since("EXCLUDE", 80002),
    Kw::since("FOLLOWING", 80002),
    Kw::since("HISTOGRAM", 80002),
    Kw::since("HISTORY", 80003),
    Kw::since("INACTIVE", 80014),
    Kw::since("INVISIBLE", 80000),
    Kw::since("LOCKED", 80001),
    Kw::since("MASTER_PUBLIC_KEY_PATH", 80004),
    Kw::since("NESTED", 80004),
    Kw::since("NETWORK_NAMESPACE", 80016),
    Kw::since("NOWAIT", 80001),
    Kw::since("NULLS", 80002),
    Kw::since("ORDINALITY", 80004),
    Kw::since("ORGANIZATION", 80004),
    Kw::since("OTHERS", 80002),
    Kw::since("PATH", 80004),
    Kw::since("PERSIST", 80000),
    Kw::since("PERSIST_ONLY", 80000),
    Kw::since("PRECEDING", 80002),
    Kw::since("REFERENCE", 80004),
    Kw::since("REMOTE", 80003),
    Kw::since("REPLICA", 80022),
    Kw::since("REPLICAS", 80022),
    Kw::since("RESOURCE", 80003),
    Kw::since("RESPECT", 80002),
    Kw::since("RESTART", 80011),
    Kw::since("RETAIN", 80014),
    Kw::since("REUSE", 80003),
    Kw::since("ROLE", 80000),
    Kw::since("SECONDARY", 80013),
    Kw::since("SKIP", 80001),
    Kw::since("SOURCE_HOST", 80023),
    Kw::since("SRID", 80003),
    Kw::since("STREAM", 80020),
    Kw::since("THREAD_PRIORITY", 80003),
    Kw::since("TIES", 80002),
    Kw::since("UNBOUNDED", 80002),
    Kw::since("VCPU", 80003),
    Kw::since("VISIBLE", 80000),
    Kw::since("ARRAY", 80017),
    Kw::since("MEMBER", 80017),
    Kw::since("RANDOM", 80018),
    Kw::since("ATTRIBUTE", 80021),
    Kw::since("ENGINE_ATTRIBUTE", 80021),
    Kw::since("AUTO", 80400),
    Kw::since("BULK", 80400),
    Kw::since("GTIDS", 80400),
    Kw::since("LOG", 80400),
    Kw::since("PARSE_TREE", 80400),
    Kw::since("VECTOR", 90000),
    // removed
    Kw::until("AUTHORS", 50599),
    Kw::until("CONTRIBUTORS", 50599),
    Kw::until("FRAC_SECOND", 50599),
    Kw::until("USE_FRM", 80099),
    Kw::until("OLD_PASSWORD", 50799),
    Kw::until("SQL_NO_CACHE", 80099),
    Kw::until("SLAVE", 90099),
    Kw::until("MASTER", 90099),
];
