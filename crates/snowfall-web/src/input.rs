use glam::Vec2;
use web_sys as web;

/// Last pointer position of an in-progress orbit drag, in CSS pixels.
#[derive(Default, Clone, Copy)]
pub struct PointerDrag {
    last: Option<Vec2>,
    pointer_id: i32,
}

impl PointerDrag {
    pub fn begin(&mut self, pos: Vec2, pointer_id: i32) {
        self.last = Some(pos);
        self.pointer_id = pointer_id;
    }

    /// Movement since the previous sample; `None` when no drag is active or
    /// the event belongs to another pointer.
    pub fn delta_to(&mut self, pos: Vec2, pointer_id: i32) -> Option<Vec2> {
        if pointer_id != self.pointer_id {
            return None;
        }
        let prev = self.last?;
        self.last = Some(pos);
        Some(pos - prev)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.last.is_some() && pointer_id == self.pointer_id {
            self.last = None;
            return true;
        }
        false
    }
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
