//! Example: Build two formula rows and evaluate them

use tally::prelude::*;

fn main() -> Result<()> {
    let controller = InputController::new();
    let mut store = RowStore::new();

    // Row 0: type each token and commit it with Enter
    for token in ["2", "+", "3", "*", "4"] {
        controller.input_changed(&mut store, 0, token)?;
        controller.key_pressed(&mut store, 0, Key::Enter)?;
    }

    // Row 1: the selection widget hands over a complete pick list
    let row = controller.add_row(&mut store);
    let rate = SuggestionOption {
        label: "Base rate".into(),
        item: SuggestionItem {
            name: "Base rate".into(),
            category: "rates".into(),
            value: ItemValue::Number(7.0),
            id: "1".into(),
        },
    };
    controller.selection_changed(
        &mut store,
        row,
        vec![Tag::from(rate), Tag::text("/"), Tag::text("2")],
    )?;

    controller.calculate(&mut store, 0)?;
    controller.calculate(&mut store, 1)?;

    for (index, row) in store.rows().iter().enumerate() {
        println!(
            "row {}: {} = {:?}",
            index,
            tally::expression(row.tags()),
            row.evaluation()
        );
    }

    Ok(())
}
