//! Property tests for table shape and tag anchoring

use std::collections::BTreeSet;

use proptest::prelude::*;
use tagframe::prelude::*;

/// A populated table of 1..6 x 1..6 with up to 8 row, column and cell tags
fn tagged_table() -> impl Strategy<Value = Table<i32>> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, columns)| {
        (
            prop::collection::vec(any::<i32>(), rows * columns),
            prop::collection::vec((0..rows, 0..columns, 0u8..3, 0u8..3), 0..8),
        )
            .prop_map(move |(data, tags)| {
                let lines = data.chunks(columns).map(<[i32]>::to_vec).collect();
                let mut table: Table<i32> = Table::from_rows(lines).unwrap();
                for (row, column, kind, name) in tags {
                    let name = format!("t{name}");
                    let value = format!("{row}-{column}");
                    let tagged = match kind {
                        0 => table.tag_row(row, name, value),
                        1 => table.tag_column(column, name, value),
                        _ => table.tag_cell(row, column, name, value),
                    };
                    tagged.unwrap();
                }
                table
            })
    })
}

fn ids(tags: &[&Tag<String>]) -> BTreeSet<TagId> {
    tags.iter().map(|t| t.id()).collect()
}

fn assert_shape(table: &Table<i32>) -> std::result::Result<(), TestCaseError> {
    prop_assert_eq!(table.cells().len(), table.row_count() * table.column_count());
    prop_assert_eq!(table.row_slices().len(), table.row_count());
    prop_assert_eq!(table.column_slices().len(), table.column_count());
    Ok(())
}

fn assert_unique_tags(table: &Table<i32>) -> std::result::Result<(), TestCaseError> {
    let unique: BTreeSet<TagId> = table.tags().iter().map(Tag::id).collect();
    prop_assert_eq!(unique.len(), table.tags().len());
    Ok(())
}

proptest! {
    #[test]
    fn prop_shape_holds_through_edits(table in tagged_table(), pick in any::<usize>()) {
        let (rows, columns) = table.dimensions();
        assert_shape(&table)?;
        assert_shape(&table.transpose())?;
        assert_shape(&table.delete_row_at(pick % rows).unwrap())?;
        assert_shape(&table.delete_column_at(pick % columns).unwrap())?;
        assert_shape(&table.insert_row_before(pick % (rows + 1), vec![0; columns]).unwrap())?;
        assert_shape(&table.push_column(vec![0; rows]).unwrap())?;
        assert_shape(&table.sub_frame((0, 0), (pick % rows, pick % columns)).unwrap())?;
    }

    #[test]
    fn prop_transpose_is_an_involution(table in tagged_table()) {
        let options = CompareOptions::with_tags();
        prop_assert!(table.transpose().transpose().equals(&table, &options));

        let mut in_place = table.copy();
        in_place.transpose_in_place();
        prop_assert!(in_place.equals(&table.transpose(), &options));
        in_place.transpose_in_place();
        prop_assert!(in_place.equals(&table, &options));
    }

    #[test]
    fn prop_copy_is_independent(table in tagged_table(), value in any::<i32>()) {
        let before = table.row_slices();
        let tag_count = table.tags().len();

        let mut copy = table.copy();
        prop_assert!(copy.equals(&table, &CompareOptions::with_tags()));

        copy.map_elements_in_place(|_, _, _| value)
            .tag_cell(0, 0, "copy-only", "x".to_string())
            .unwrap()
            .delete_row_in_place_at(0)
            .unwrap();

        prop_assert_eq!(table.row_slices(), before);
        prop_assert_eq!(table.tags().len(), tag_count);
        prop_assert!(!table.tags().has_tag_with_name("copy-only"));
    }

    #[test]
    fn prop_tags_stay_unique(table in tagged_table(), pick in any::<usize>()) {
        let (rows, columns) = table.dimensions();
        assert_unique_tags(&table)?;
        assert_unique_tags(&table.transpose())?;
        assert_unique_tags(&table.delete_row_at(pick % rows).unwrap())?;
        assert_unique_tags(&table.insert_column_before(pick % (columns + 1), vec![0; rows]).unwrap())?;
    }

    #[test]
    fn prop_delete_row_keeps_tags_local(table in tagged_table(), pick in any::<usize>()) {
        let removed = pick % table.row_count();
        let deleted = table.delete_row_at(removed).unwrap();

        let mut survivors = 0;
        for tag in table.tags() {
            let expected = match tag.coordinate() {
                Coordinate::Row(row) if row == removed => None,
                Coordinate::Row(row) if row > removed => Some(Coordinate::Row(row - 1)),
                Coordinate::Cell { row, .. } if row == removed => None,
                Coordinate::Cell { row, column } if row > removed => {
                    Some(Coordinate::cell(row - 1, column))
                }
                other => Some(other),
            };

            if let Some(coordinate) = expected {
                survivors += 1;
                let moved = deleted.tags().unique_tag_for(tag.name(), coordinate);
                prop_assert!(moved.is_ok());
                prop_assert_eq!(moved.unwrap().value(), tag.value());
            }
        }
        // Everything else was dropped
        prop_assert_eq!(deleted.tags().len(), survivors);
    }

    #[test]
    fn prop_tags_for_is_the_union_of_axes(table in tagged_table()) {
        for row in 0..table.row_count() {
            for column in 0..table.column_count() {
                let mut union = ids(&table.row_tags_for(row));
                union.extend(ids(&table.column_tags_for(column)));
                union.extend(ids(&table.cell_tags_for(row, column)));
                prop_assert_eq!(ids(&table.tags_for(row, column)), union);
            }
        }
    }
}
