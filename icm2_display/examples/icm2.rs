use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, StyledDrawable},
};
use icm2_display::{icm2::DEFAULT_I2C_PATH, Icm2};

fn main() -> anyhow::Result<()> {
    let mut display = Icm2::open(DEFAULT_I2C_PATH)?;
    display.init()?;
    display.force_clear();

    {
        let mut canvas = display.canvas();
        let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

        canvas.bounding_box().draw_styled(&style, &mut canvas)?;

        Line::new(Point::new(0, 0), Point::new(105, 64)).draw_styled(&style, &mut canvas)?;
    }

    display.flush();
    Ok(())
}
