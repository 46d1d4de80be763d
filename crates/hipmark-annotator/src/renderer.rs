//! Render adapter.
//!
//! Turns an [`AnnotationSet`] (plus the live [`Interaction`]) into a flat list
//! of [`DrawItem`]s in display space. Any surface can paint the list in order;
//! nothing here mutates state.

use std::fmt;

use hipmark_core::constants::{CENTER_DOT_RADIUS_PX, HANDLE_HALF_SIZE_PX, KEYPOINT_RADIUS_PX};
use hipmark_core::Side;
use hipmark_settings::ViewSettings;

use crate::annotation_set::AnnotationSet;
use crate::interaction::{Interaction, Preview};
use crate::model::{FemurCircle, Keypoint, PelvisRect, Point, Slot};
use crate::viewport::to_display;

const STROKE_WIDTH: f64 = 2.0;
/// Dash pattern (on, off) in display pixels.
pub const DASH_PATTERN: (f64, f64) = (5.0, 3.0);
const LABEL_FONT_SIZE: f64 = 9.0;
const RECT_LABEL_FONT_SIZE: f64 = 10.0;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const PELVIS: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const LEFT_KEYPOINT: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const RIGHT_KEYPOINT: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const LEFT_FEMUR: Color = Color::rgb(0xff, 0x45, 0x00);
    pub const RIGHT_FEMUR: Color = Color::rgb(0x41, 0x69, 0xe1);
    pub const ANGLE_LINE: Color = Color::rgb(0xff, 0xcc, 0x00);
    pub const HANDLE: Color = Color::rgb(0xff, 0xff, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub fn keypoint(side: Side) -> Color {
        match side {
            Side::Left => Self::LEFT_KEYPOINT,
            Side::Right => Self::RIGHT_KEYPOINT,
        }
    }

    pub fn femur(side: Side) -> Color {
        match side {
            Side::Left => Self::LEFT_FEMUR,
            Side::Right => Self::RIGHT_FEMUR,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Geometry of one drawable, in display pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { min: Point, max: Point },
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
    Text { at: Point, text: String, size: f64 },
}

/// What a [`DrawItem`] depicts; lets a surface group or hit-test items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Shape(Slot),
    Label(Slot),
    AngleOverlay,
    Preview,
    Handle,
}

/// One primitive with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub primitive: Primitive,
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub line_width: f64,
    pub dashed: bool,
    pub layer: Layer,
}

impl DrawItem {
    fn outline(primitive: Primitive, color: Color, layer: Layer) -> Self {
        Self {
            primitive,
            stroke: Some(color),
            fill: None,
            line_width: STROKE_WIDTH,
            dashed: false,
            layer,
        }
    }

    fn filled(primitive: Primitive, fill: Color, outline: Color, layer: Layer) -> Self {
        Self {
            primitive,
            stroke: Some(outline),
            fill: Some(fill),
            line_width: 1.0,
            dashed: false,
            layer,
        }
    }

    fn text(at: Point, text: String, size: f64, color: Color, layer: Layer) -> Self {
        Self {
            primitive: Primitive::Text { at, text, size },
            stroke: None,
            fill: Some(color),
            line_width: 0.0,
            dashed: false,
            layer,
        }
    }

    fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.primitive {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Hides every annotation visual when false.
    pub show_shapes: bool,
    /// Hides shape name labels when false. Angle readouts stay visible.
    pub show_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_shapes: true,
            show_text: true,
        }
    }
}

impl From<&ViewSettings> for RenderOptions {
    fn from(view: &ViewSettings) -> Self {
        Self {
            show_shapes: view.show_shapes,
            show_text: view.show_text,
        }
    }
}

/// Draw list for the stored annotations of one image.
pub fn render_annotations(set: &AnnotationSet, zoom: f64, options: RenderOptions) -> Vec<DrawItem> {
    let mut items = Vec::new();
    if !options.show_shapes {
        return items;
    }

    if let Some(rect) = set.rectangle() {
        push_rectangle(&mut items, rect, zoom, options.show_text);
    }
    for side in [Side::Left, Side::Right] {
        if let Some(kp) = set.keypoint(side) {
            push_keypoint(&mut items, kp, side, zoom, options.show_text);
        }
    }
    for side in [Side::Left, Side::Right] {
        if let Some(circle) = set.circle(side) {
            push_circle(&mut items, circle, side, zoom, options.show_text);
        }
    }
    push_angle_overlay(&mut items, set, zoom);
    items
}

/// Draw list for the transient preview and resize handles.
pub fn render_interaction(interaction: &Interaction, set: &AnnotationSet, zoom: f64) -> Vec<DrawItem> {
    let mut items = Vec::new();

    match interaction.preview() {
        Some(Preview::Rectangle(rect)) => {
            let (min, max) = display_corners(&rect, zoom);
            items.push(
                DrawItem::outline(Primitive::Rect { min, max }, Color::PELVIS, Layer::Preview).dashed(),
            );
        }
        Some(Preview::Circle(side, circle)) => {
            let center = to_display(circle.center(), zoom);
            let color = Color::femur(side);
            items.push(
                DrawItem::outline(
                    Primitive::Circle {
                        center,
                        radius: circle.radius() * zoom,
                    },
                    color,
                    Layer::Preview,
                )
                .dashed(),
            );
            items.push(DrawItem::filled(
                Primitive::Circle {
                    center,
                    radius: CENTER_DOT_RADIUS_PX,
                },
                color,
                Color::WHITE,
                Layer::Preview,
            ));
        }
        None => {}
    }

    for (_, at) in interaction.active_handles(set) {
        let at = to_display(at, zoom);
        let h = HANDLE_HALF_SIZE_PX;
        items.push(DrawItem::filled(
            Primitive::Rect {
                min: Point::new(at.x - h, at.y - h),
                max: Point::new(at.x + h, at.y + h),
            },
            Color::HANDLE,
            Color::BLACK,
            Layer::Handle,
        ));
    }
    items
}

/// Annotations followed by the interaction overlay, in paint order.
pub fn render_scene(
    set: &AnnotationSet,
    interaction: &Interaction,
    zoom: f64,
    options: RenderOptions,
) -> Vec<DrawItem> {
    let mut items = render_annotations(set, zoom, options);
    items.extend(render_interaction(interaction, set, zoom));
    items
}

fn display_corners(rect: &PelvisRect, zoom: f64) -> (Point, Point) {
    (
        to_display(Point::new(rect.x1(), rect.y1()), zoom),
        to_display(Point::new(rect.x2(), rect.y2()), zoom),
    )
}

fn push_rectangle(items: &mut Vec<DrawItem>, rect: &PelvisRect, zoom: f64, show_text: bool) {
    let (min, max) = display_corners(rect, zoom);
    items.push(DrawItem::outline(
        Primitive::Rect { min, max },
        Color::PELVIS,
        Layer::Shape(Slot::Rectangle),
    ));
    if show_text {
        items.push(DrawItem::text(
            Point::new((min.x + max.x) / 2.0, min.y - 10.0),
            "Pelvis".to_string(),
            RECT_LABEL_FONT_SIZE,
            Color::PELVIS,
            Layer::Label(Slot::Rectangle),
        ));
    }
}

fn push_keypoint(items: &mut Vec<DrawItem>, kp: &Keypoint, side: Side, zoom: f64, show_text: bool) {
    let at = to_display(kp.position(), zoom);
    let color = Color::keypoint(side);
    let slot = Slot::keypoint(side);
    let mut marker = DrawItem::filled(
        Primitive::Circle {
            center: at,
            radius: KEYPOINT_RADIUS_PX,
        },
        color,
        Color::WHITE,
        Layer::Shape(slot),
    );
    marker.line_width = STROKE_WIDTH;
    items.push(marker);

    if show_text {
        let name = match side {
            Side::Left => "L-Acetabulum",
            Side::Right => "R-Acetabulum",
        };
        items.push(DrawItem::text(
            Point::new(at.x, at.y - 15.0),
            name.to_string(),
            LABEL_FONT_SIZE,
            color,
            Layer::Label(slot),
        ));
    }
}

fn push_circle(items: &mut Vec<DrawItem>, circle: &FemurCircle, side: Side, zoom: f64, show_text: bool) {
    let center = to_display(circle.center(), zoom);
    let radius = circle.radius() * zoom;
    let color = Color::femur(side);
    let slot = Slot::circle(side);

    items.push(DrawItem::outline(
        Primitive::Circle { center, radius },
        color,
        Layer::Shape(slot),
    ));
    items.push(DrawItem::filled(
        Primitive::Circle {
            center,
            radius: CENTER_DOT_RADIUS_PX,
        },
        color,
        Color::WHITE,
        Layer::Shape(slot),
    ));

    if show_text {
        let name = match side {
            Side::Left => "L-Femur",
            Side::Right => "R-Femur",
        };
        items.push(DrawItem::text(
            Point::new(center.x, center.y - radius - 15.0),
            name.to_string(),
            LABEL_FONT_SIZE,
            color,
            Layer::Label(slot),
        ));
    }
}

/// Center-to-center line, center-to-keypoint lines and angle readouts.
///
/// Lines need both circles and both keypoints; readouts additionally need
/// the calculated angle.
fn push_angle_overlay(items: &mut Vec<DrawItem>, set: &AnnotationSet, zoom: f64) {
    let (Some(lc), Some(rc), Some(lk), Some(rk)) = (
        set.circle(Side::Left),
        set.circle(Side::Right),
        set.keypoint(Side::Left),
        set.keypoint(Side::Right),
    ) else {
        return;
    };

    let left_center = to_display(lc.center(), zoom);
    let right_center = to_display(rc.center(), zoom);
    items.push(
        DrawItem::outline(
            Primitive::Line {
                from: left_center,
                to: right_center,
            },
            Color::ANGLE_LINE,
            Layer::AngleOverlay,
        )
        .dashed(),
    );

    for (side, center, kp) in [(Side::Left, left_center, lk), (Side::Right, right_center, rk)] {
        let point = to_display(kp.position(), zoom);
        let color = Color::femur(side);
        items.push(DrawItem::outline(
            Primitive::Line { from: center, to: point },
            color,
            Layer::AngleOverlay,
        ));

        if let Some(na) = set.norberg_angle(side) {
            let mid = center.midpoint(&point);
            items.push(DrawItem::text(
                Point::new(mid.x, mid.y - 15.0),
                format!("NA: {:.1}°", na),
                LABEL_FONT_SIZE,
                color,
                Layer::AngleOverlay,
            ));
        }
        if let Some(ja) = set.joint_angle(side) {
            items.push(DrawItem::text(
                Point::new(center.x, center.y - 20.0),
                format!("JA: {:.1}°", ja),
                LABEL_FONT_SIZE,
                Color::ANGLE_LINE,
                Layer::AngleOverlay,
            ));
        }
    }
}
