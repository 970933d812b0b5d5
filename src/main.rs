use rowbind::memory::MemoryDb;
use rowbind::{BindResult, Binding, Record, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

rowbind::record! {
    #[derive(Debug, Default)]
    #[allow(dead_code)]
    struct Tweet {
        timeline: String,
        id: Uuid,
        text: String,
    }
}

rowbind::record! {
    #[derive(Debug, Default)]
    #[allow(dead_code)]
    struct TaggedTweet {
        #[tag(cql = "timeline")]
        owner: String,
        #[tag(cql = "id")]
        tweet_id: Uuid,
        #[tag(cql = "text")]
        body: String,
    }
}

const SELECT: &str = "SELECT text, id, timeline FROM tweet WHERE timeline = ?";

fn main() -> BindResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut db = MemoryDb::new();
    db.execute("CREATE TABLE tweet (timeline TEXT, id UUID, text TEXT)", &[])?;
    for i in 0..5 {
        db.execute(
            "INSERT INTO tweet (timeline, id, text) VALUES (?, ?, ?)",
            &[
                Value::text("me"),
                Value::Uuid(Uuid::new_v4()),
                Value::text(format!("hello world {}", i)),
            ],
        )?;
    }
    let me = [Value::text("me")];

    let mut tweet = Tweet::default();

    let mut binding = Binding::by_name(db.query(SELECT, &me)?);
    let mut count = 0;
    while binding.scan(&mut tweet) {
        count += 1;
    }
    binding.close()?;
    info!(count, last = ?tweet, "bound by name");

    let mut binding = Binding::by_func(db.query(SELECT, &me)?, |column| match column {
        "text" | "id" | "timeline" => Tweet::locate(column),
        _ => None,
    });
    let mut count = 0;
    while binding.scan(&mut tweet) {
        count += 1;
    }
    binding.close()?;
    info!(count, "bound by function");

    let mut binding = Binding::by_map(
        db.query(SELECT, &me)?,
        [("timeline", "timeline"), ("id", "id"), ("text", "text")],
    );
    let mut count = 0;
    while binding.scan(&mut tweet) {
        count += 1;
    }
    binding.close()?;
    info!(count, "bound by map");

    let mut tagged = TaggedTweet::default();
    let mut binding = Binding::by_tag(db.query(SELECT, &me)?, "cql");
    let mut count = 0;
    while binding.scan(&mut tagged) {
        count += 1;
    }
    binding.close()?;
    info!(count, last = ?tagged, "bound by tag");

    Ok(())
}
