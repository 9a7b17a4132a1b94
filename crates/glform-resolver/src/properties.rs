//! Property resolution: the second pass over a designer file.
//!
//! Walks every line again and applies geometry, text, items and containment
//! to the controls found by the extractor, plus the form's own attributes.

use glform_core::{
    Control, ControlId, Diagnostic, DiagnosticKind, FormModel, ParseError, Point, Size,
};
use glform_parser::{classify, Line, Member, Statement};
use tracing::{debug, trace, warn};

use crate::items::{PendingList, ScanState};

/// Apply every property statement in `lines` to `model`.
///
/// Statements naming unknown controls are ignored. Only geometry that cannot
/// be read as numbers is an error.
pub fn resolve_properties(
    lines: &[Line<'_>],
    model: &mut FormModel,
) -> Result<Vec<Diagnostic>, ParseError> {
    let mut resolver = PropertyResolver::new(model);
    for line in lines {
        resolver.feed(line)?;
    }
    Ok(resolver.finish())
}

struct PropertyResolver<'m> {
    model: &'m mut FormModel,
    state: ScanState,
    diagnostics: Vec<Diagnostic>,
    applied: usize,
}

impl<'m> PropertyResolver<'m> {
    fn new(model: &'m mut FormModel) -> Self {
        Self {
            model,
            state: ScanState::Scanning,
            diagnostics: Vec::new(),
            applied: 0,
        }
    }

    fn feed(&mut self, line: &Line<'_>) -> Result<(), ParseError> {
        match std::mem::take(&mut self.state) {
            ScanState::AccumulatingList(mut pending) => {
                pending.push_line(line.content);
                self.continue_list(pending);
                Ok(())
            }
            ScanState::Scanning => self.apply(line),
        }
    }

    fn apply(&mut self, line: &Line<'_>) -> Result<(), ParseError> {
        match classify(line.content) {
            Statement::FormName(name) => self.model.form.name = name.to_string(),
            Statement::FormTitle(title) => self.model.form.title = title.to_string(),
            Statement::FormAdd(name) => match self.model.lookup(name) {
                Some(id) => self.model.attach_to_form(id),
                None => trace!(name, line = line.line_number, "form adds unknown control"),
            },
            Statement::ClientSize(args) => {
                let (width, height) = args.to_pair(line.line_number)?;
                self.model.form.client_width = width;
                self.model.form.client_height = height;
            }
            Statement::Member { control, property } => {
                let Some(id) = self.model.lookup(control) else {
                    trace!(control, line = line.line_number, "statement on unknown control");
                    return Ok(());
                };
                return self.apply_member(id, property, line);
            }
            Statement::SectionMarker | Statement::Declaration { .. } | Statement::Other => {
                return Ok(())
            }
        }
        self.applied += 1;
        Ok(())
    }

    fn apply_member(
        &mut self,
        id: ControlId,
        property: Member<'_>,
        line: &Line<'_>,
    ) -> Result<(), ParseError> {
        match property {
            Member::Location(args) => {
                let (x, y) = args.to_pair(line.line_number)?;
                self.with_control(id, |c| c.position = Point::new(x, y));
            }
            Member::Size(args) => {
                let (width, height) = args.to_pair(line.line_number)?;
                self.with_control(id, |c| c.size = Size::new(width, height));
            }
            Member::Text(text) => self.with_control(id, |c| c.text = text.to_string()),
            Member::AddChild(child) => match self.model.lookup(child) {
                Some(child_id) => self.model.attach_child(id, child_id),
                None => {
                    trace!(child, line = line.line_number, "container adds unknown control");
                    return Ok(());
                }
            },
            Member::ItemsStart(tail) => {
                self.continue_list(PendingList::open(id, tail, line.line_number));
                return Ok(());
            }
            Member::Unknown(name) => {
                trace!(property = name, line = line.line_number, "ignoring property");
                return Ok(());
            }
        }
        self.applied += 1;
        Ok(())
    }

    /// Store the list if it is closed, otherwise keep accumulating.
    fn continue_list(&mut self, pending: PendingList) {
        if !pending.is_closed() {
            self.state = ScanState::AccumulatingList(pending);
            return;
        }

        let (id, start_line) = (pending.control, pending.start_line);
        match pending.into_items() {
            Some(items) => {
                self.with_control(id, |c| c.items = items);
                self.applied += 1;
            }
            None => warn!(
                line = start_line,
                "item list does not hold only string literals, ignoring it"
            ),
        }
    }

    fn with_control(&mut self, id: ControlId, update: impl FnOnce(&mut Control)) {
        if let Some(control) = self.model.get_mut(id) {
            update(control);
        }
    }

    fn finish(mut self) -> Vec<Diagnostic> {
        if let ScanState::AccumulatingList(pending) = std::mem::take(&mut self.state) {
            warn!(line = pending.start_line, "item list never closed, ignoring it");
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnterminatedList,
                Some(pending.start_line),
                "Item list is not closed before the end of the file",
            ));
        }
        debug!(applied = self.applied, "resolved properties");
        self.diagnostics
    }
}
