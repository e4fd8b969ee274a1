//! Render a template and insert it into a document at a cursor position.

use microtpl_core::{CursorMarkerInserter, Position, TextBuffer};

use crate::app::App;
use crate::error::{CtlError, CtlResult};
use crate::{output, InsertArgs};

pub(crate) async fn handle_insert_command(app: &App, args: InsertArgs) -> CtlResult<()> {
    let vault = app.vault()?;

    let selected = {
        let mut input = std::io::stdin().lock();
        app.select_template(&vault, args.template.as_deref(), &mut input)?
    };
    let Some(template) = selected else {
        output::warning("No template selected.");
        return Ok(());
    };

    let rendered = app.render(&vault, &template).await?;

    let document = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(|e| CtlError::io("read", args.file.display(), e))?;
    let mut buffer = TextBuffer::from_text(&document);

    let column = args
        .marker_column
        .map(Into::into)
        .unwrap_or(app.settings().marker_column);
    let cursor = Position::new(args.line, args.ch);
    let outcome = CursorMarkerInserter::new(column).insert(&mut buffer, cursor, &rendered)?;

    tracing::debug!(
        template = %template.path,
        %cursor,
        marker = ?outcome.marker,
        "Inserted template"
    );

    if args.dry_run {
        output::document(&buffer.text());
        output::status("Cursor", outcome.cursor);
    } else {
        tokio::fs::write(&args.file, buffer.text())
            .await
            .map_err(|e| CtlError::io("write", args.file.display(), e))?;
        output::success(format!(
            "Inserted '{}' into {}",
            template.name,
            args.file.display()
        ));
        output::label("Cursor", outcome.cursor);
    }

    Ok(())
}
