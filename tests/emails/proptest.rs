use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use with_postgres_ready::with_postgres_ready;

use mailcursor::emails::{
    Email, EmailStatus, EmailStore, KeySource, MemoryEmailStore, PostgresEmailStore,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    #[test]
    fn random_set_of_operations_stage_the_same_keys(
        operations in Operations::arbitrary(),
    ) {
        with_postgres_ready(|url| async move {
            let mut memory_store = MemoryEmailStore::new();
            let mut postgres_store = PostgresEmailStore::new(&url).await.unwrap();

            for operation in operations.0.iter() {
                match operation {
                    Operation::Upsert(email) => {
                        let mem = memory_store.upsert(email.clone()).await.map_err(|e| format!("{e:?}"));
                        let pg = postgres_store.upsert(email.clone()).await.map_err(|e| format!("{e:?}"));
                        assert_eq!(mem, pg);
                    },
                    Operation::Get(id) => {
                        let mem = memory_store.get(id).await.map_err(|e| format!("{e:?}"));
                        let pg = postgres_store.get(id).await.map_err(|e| format!("{e:?}"));
                        assert_eq!(mem, pg);
                    },
                    Operation::Remove(id) => {
                        let mem = memory_store.remove(id).await.map_err(|e| format!("{e:?}"));
                        let pg = postgres_store.remove(id).await.map_err(|e| format!("{e:?}"));
                        assert_eq!(mem, pg);
                    },
                    Operation::Stage => {
                        let mem = memory_store.retrieve_keys().await.map_err(|e| format!("{e:?}"));
                        let pg = postgres_store.retrieve_keys().await.map_err(|e| format!("{e:?}"));
                        assert_eq!(mem, pg);
                    },
                }
            }
        });
    }
}

#[derive(Debug, Clone)]
enum Operation {
    Upsert(Email),
    Get(i64),
    Remove(i64),
    Stage,
}

#[derive(Debug, Clone)]
struct Operations(Vec<Operation>);

fn email(id: i64, minute: i64, status: EmailStatus, content: Vec<u8>) -> Email {
    // Whole seconds survive the round trip through timestamptz unchanged.
    let created = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minute);
    Email {
        status,
        date_create: created,
        date_update: created,
        ..Email::pending(id, "NEWSLETTER", content)
    }
}

impl Arbitrary for Operations {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        let operations = vec![1, 2, 3, 4];
        let statuses = vec![EmailStatus::Pending, EmailStatus::Sent, EmailStatus::Error];
        (
            prop::collection::vec(any::<i64>(), 10..50),
            prop::collection::vec(
                (
                    any::<prop::sample::Index>(),
                    0..60i64,
                    prop::sample::select(statuses),
                    any::<Vec<u8>>(),
                    prop::sample::select(operations),
                ),
                500,
            ),
        )
            .prop_map(|(ids, operations)| {
                Operations(
                    operations
                        .into_iter()
                        .map(|(idx, minute, status, content, operation)| {
                            let id = ids[idx.index(ids.len())];
                            match operation {
                                1 => Operation::Upsert(email(id, minute, status, content)),
                                2 => Operation::Get(id),
                                3 => Operation::Remove(id),
                                4 => Operation::Stage,
                                _ => unreachable!(),
                            }
                        })
                        .collect(),
                )
            })
            .boxed()
    }
}
