//! Fixed script text.
//!
//! Helper functions are written as-is through [`LineBuffer::print_multiline`], so
//! their indentation here only needs to be consistent, not match the output.
//!
//! [`LineBuffer::print_multiline`]: crate::LineBuffer::print_multiline

/// Maps Z-up geometry space onto the script's Y-down 3D space: `(x, y, z) -> (x, -z, -y)`.
pub const AXIS_CORRECTION: &str = "applyMatrix(1, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 0, 0, 0, 0, 1);";

/// Draw-block statement spinning a 3D scene while the space bar toggle is on.
pub const SPACE_BAR_SPIN: &str = r#"
if (spaceBarToggled) {
  rotateZ(frameCount * 0.01);
}
"#;

pub const MOUSE_LOCATION: &str = r#"
function showMouseLocation() {
  const x = (mouseX - width / 2) / renderScale;
  const y = (height / 2 - mouseY) / renderScale;
  push();
  resetMatrix();
  noStroke();
  fill(0);
  textSize(12);
  text(nf(x, 1, 2) + ", " + nf(y, 1, 2), mouseX + 8, mouseY - 8);
  pop();
}
"#;

pub const KEY_PRESSED: &str = r#"
function keyPressed() {
  if (key === ' ') {
    spaceBarToggled = !spaceBarToggled;
  }
}
"#;

pub const GRID: &str = r#"
function drawGrid() {
  push();
  stroke(220);
  strokeWeight(1.0 / lineScale);
  const halfWidth = floor(width / 2 / renderScale);
  const halfHeight = floor(height / 2 / renderScale);
  for (let x = -halfWidth; x <= halfWidth; x++) {
    line(x, -halfHeight, x, halfHeight);
  }
  for (let y = -halfHeight; y <= halfHeight; y++) {
    line(-halfWidth, y, halfWidth, y);
  }
  pop();
}
"#;

pub const ORIGIN_2D: &str = r#"
function drawOrigin() {
  push();
  strokeWeight(2.0 / lineScale);
  stroke(255, 0, 0);
  line(0, 0, 1, 0);
  stroke(0, 255, 0);
  line(0, 0, 0, 1);
  pop();
}
"#;

/// Called before the render scale is applied, so axis lengths are in pixels.
pub const ORIGIN_3D: &str = r#"
function drawOrigin3D() {
  push();
  strokeWeight(2.0);
  stroke(255, 0, 0);
  line(0, 0, 0, renderScale, 0, 0);
  stroke(0, 255, 0);
  line(0, 0, 0, 0, renderScale, 0);
  stroke(0, 0, 255);
  line(0, 0, 0, 0, 0, renderScale);
  pop();
}
"#;

pub const NORMAL_2D: &str = r#"
function drawNormal(x, y, dx, dy) {
  const length = sqrt(dx * dx + dy * dy);
  if (length === 0) {
    return;
  }
  const ex = x + dx / length;
  const ey = y + dy / length;
  line(x, y, ex, ey);
  circle(ex, ey, 2.0 / renderScale);
}
"#;

pub const NORMAL_3D: &str = r#"
function drawNormal3D(x, y, z, dx, dy, dz) {
  const length = sqrt(dx * dx + dy * dy + dz * dz);
  if (length === 0) {
    return;
  }
  line(x, y, z, x + dx / length, y + dy / length, z + dz / length);
}
"#;

pub const TANGENT: &str = r#"
function drawTangent(x, y, dx, dy) {
  const length = sqrt(dx * dx + dy * dy);
  if (length === 0) {
    return;
  }
  const tx = dx / length;
  const ty = dy / length;
  line(x - tx, y - ty, x + tx, y + ty);
}
"#;

pub const SPHERE: &str = r#"
function drawSphere(x, y, z, radius) {
  push();
  translate(x, y, z);
  sphere(radius, 12, 8);
  pop();
}
"#;
