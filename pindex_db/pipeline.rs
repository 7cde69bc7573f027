use mongodb::bson::{Document, doc};

use crate::models::{INDEXER_COLLECTION, PLAYER_COLLECTION};

/// Aggregation over `player_index` that joins each record with its player and
/// indexer and flattens the result.
///
/// `$unwind` without `preserveNullAndEmptyArrays` drops records whose player
/// or indexer is missing. Sorting runs on the server with its default collation.
pub fn player_index_report_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": PLAYER_COLLECTION,
                "localField": "player_id",
                "foreignField": "_id",
                "as": "player",
            }
        },
        doc! { "$unwind": "$player" },
        doc! {
            "$lookup": {
                "from": INDEXER_COLLECTION,
                "localField": "index_id",
                "foreignField": "_id",
                "as": "indexer",
            }
        },
        doc! { "$unwind": "$indexer" },
        doc! {
            "$project": {
                "_id": 1,
                "player_id": "$player._id",
                "player_name": "$player.name",
                "player_age": "$player.age",
                "index_name": "$indexer.name",
                "value": "$value",
            }
        },
        doc! { "$sort": { "player_name": 1, "index_name": 1 } },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_names(pipeline: &[Document]) -> Vec<String> {
        pipeline
            .iter()
            .map(|stage| stage.keys().next().cloned().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_pipeline_stage_order() {
        let pipeline = player_index_report_pipeline();

        assert_eq!(
            stage_names(&pipeline),
            vec!["$lookup", "$unwind", "$lookup", "$unwind", "$project", "$sort"]
        );
    }

    #[test]
    fn test_lookups_target_sibling_collections() {
        let pipeline = player_index_report_pipeline();

        let player = pipeline[0].get_document("$lookup").unwrap();
        assert_eq!(player.get_str("from").unwrap(), "player");
        assert_eq!(player.get_str("localField").unwrap(), "player_id");
        assert_eq!(player.get_str("foreignField").unwrap(), "_id");

        let indexer = pipeline[2].get_document("$lookup").unwrap();
        assert_eq!(indexer.get_str("from").unwrap(), "indexer");
        assert_eq!(indexer.get_str("localField").unwrap(), "index_id");
        assert_eq!(indexer.get_str("foreignField").unwrap(), "_id");
    }

    #[test]
    fn test_unwinds_are_inner_joins() {
        let pipeline = player_index_report_pipeline();

        assert_eq!(pipeline[1].get_str("$unwind").unwrap(), "$player");
        assert_eq!(pipeline[3].get_str("$unwind").unwrap(), "$indexer");
    }

    #[test]
    fn test_projection_and_sort() {
        let pipeline = player_index_report_pipeline();

        let project = pipeline[4].get_document("$project").unwrap();
        assert_eq!(project.get_i32("_id").unwrap(), 1);
        assert_eq!(project.get_str("player_id").unwrap(), "$player._id");
        assert_eq!(project.get_str("player_name").unwrap(), "$player.name");
        assert_eq!(project.get_str("player_age").unwrap(), "$player.age");
        assert_eq!(project.get_str("index_name").unwrap(), "$indexer.name");
        assert_eq!(project.get_str("value").unwrap(), "$value");

        let sort = pipeline[5].get_document("$sort").unwrap();
        let keys: Vec<&String> = sort.keys().collect();
        assert_eq!(keys, vec!["player_name", "index_name"]);
        assert_eq!(sort.get_i32("player_name").unwrap(), 1);
        assert_eq!(sort.get_i32("index_name").unwrap(), 1);
    }
}
