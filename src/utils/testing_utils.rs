use uuid::Uuid;

use crate::error::BindResult;
use crate::memory::{MemoryDb, MemoryRows};
use crate::row::{ColumnSpec, Kind, Value};

crate::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Tweet {
        pub timeline: String,
        pub id: Uuid,
        pub text: String,
    }
}

crate::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct TaggedTweet {
        #[tag(cql = "timeline")]
        pub timeline: String,
        #[tag(cql = "id")]
        pub id: Uuid,
        #[tag(cql = "text")]
        pub text: String,
    }
}

/// `count` tweets on the "me" timeline, projected as `text, id, timeline`.
pub fn tweet_rows(count: usize) -> MemoryRows {
    MemoryRows::new(
        vec![
            ColumnSpec::new("text", Kind::Text),
            ColumnSpec::new("id", Kind::Uuid),
            ColumnSpec::new("timeline", Kind::Text),
        ],
        (0..count)
            .map(|i| {
                vec![
                    Value::text(format!("hello world {}", i)),
                    Value::Uuid(Uuid::new_v4()),
                    Value::text("me"),
                ]
            })
            .collect(),
    )
}

/// A database with a `tweet` table holding `count` tweets on "me".
pub fn tweet_db(count: usize) -> BindResult<MemoryDb> {
    let mut db = MemoryDb::new();
    db.execute("CREATE TABLE tweet (timeline TEXT, id UUID, text TEXT)", &[])?;
    for i in 0..count {
        db.execute(
            "INSERT INTO tweet (timeline, id, text) VALUES (?, ?, ?)",
            &[
                Value::text("me"),
                Value::Uuid(Uuid::new_v4()),
                Value::text(format!("hello world {}", i)),
            ],
        )?;
    }
    Ok(db)
}
