//! View rendering methods for the textinput component.

use super::model::Model;

impl Model {
    /// Renders the prompt followed by the visible part of the value.
    ///
    /// A focused input draws the cell under the cursor with `cursor_style`;
    /// an empty input shows the placeholder instead of the value.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        // Without focus there is no cursor to follow; show the start.
        if !self.focus {
            let text: String = self.value[..self.window_end(0)].iter().collect();
            return format!("{}{}", prompt, self.text_style.render(&text));
        }

        let visible = &self.value[self.offset..self.window_end(self.offset)];
        let pos = self.pos.saturating_sub(self.offset);

        let mut v = String::new();
        let before: String = visible[..pos.min(visible.len())].iter().collect();
        v.push_str(&self.text_style.render(&before));
        match visible.get(pos) {
            Some(ch) => {
                v.push_str(&self.cursor_style.render(&ch.to_string()));
                let after: String = visible[pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&after));
            }
            None => v.push_str(&self.cursor_style.render(" ")),
        }
        format!("{}{}", prompt, v)
    }

    fn placeholder_view(&self) -> String {
        if !self.focus {
            return self.placeholder_style.render(&self.placeholder);
        }
        let mut chars = self.placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();
        format!(
            "{}{}",
            self.cursor_style.render(&first),
            self.placeholder_style.render(&rest)
        )
    }
}
