//! Full-screen fragment-shader surfaces on a WebGL2 canvas
//!
//! A [`ShaderSurface`] owns one program drawing a single quad. [`run_loop`]
//! drives it from `requestAnimationFrame` and returns a [`RafLoop`]; dropping
//! the loop cancels the pending frame, frees the frame closure and releases
//! the GL objects. [`animate`] is the same loop without a surface, for
//! CSS-driven scenes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Failure while bringing up a shader surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("WebGL2 is not available")]
    ContextUnavailable,
    #[error("failed to allocate GL object: {0}")]
    Allocation(&'static str),
    #[error("shader compile error: {0}")]
    Compile(String),
    #[error("program link error: {0}")]
    Link(String),
}

/// Bookkeeping for a `requestAnimationFrame` loop: the frame that still
/// needs cancelling, and whether more frames may be requested.
#[derive(Debug, Default)]
pub struct FrameSchedule {
    pending: Option<i32>,
    stopped: bool,
}

impl FrameSchedule {
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Record a requested frame. Ignored once stopped.
    pub fn scheduled(&mut self, id: i32) {
        if !self.stopped {
            self.pending = Some(id);
        }
    }

    /// The pending frame has fired. Returns whether it should run.
    pub fn fired(&mut self) -> bool {
        self.pending = None;
        !self.stopped
    }

    /// Stop the loop, returning the frame id to cancel, if any
    pub fn stop(&mut self) -> Option<i32> {
        self.stopped = true;
        self.pending.take()
    }
}

/// Flag set by resize listeners and consumed by the render loop
#[derive(Clone, Debug)]
pub struct ResizeFlag {
    dirty: Arc<AtomicBool>,
}

impl Default for ResizeFlag {
    fn default() -> Self {
        Self {
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl ResizeFlag {
    pub fn mark(&self) {
        self.dirty.store(true, Ordering::Relaxed);
    }

    /// Returns true once per `mark`
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::Relaxed)
    }
}

/// Timing handed to each frame callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Seconds since page load
    pub time: f64,
    /// Seconds since the previous frame, clamped
    pub dt: f64,
}

pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec2 aPosition;
out vec2 vUv;
void main() {
    vUv = aPosition * 0.5 + 0.5;
    gl_Position = vec4(aPosition, 0.0, 1.0);
}
"#;

#[cfg(not(feature = "ssr"))]
pub use browser::*;

#[cfg(not(feature = "ssr"))]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
        WebGlVertexArrayObject,
    };

    use super::{FrameInfo, FrameSchedule, ResizeFlag, SurfaceError, VERTEX_SHADER};
    use crate::core::{Resolution, frame_delta};

    const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

    pub struct ShaderSurface {
        canvas: HtmlCanvasElement,
        gl: GL,
        program: WebGlProgram,
        vao: WebGlVertexArrayObject,
        buffer: WebGlBuffer,
        resolution: Resolution,
    }

    fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, SurfaceError> {
        let shader = gl
            .create_shader(kind)
            .ok_or(SurfaceError::Allocation("shader"))?;
        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        let ok = gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(&shader).unwrap_or_default();
            gl.delete_shader(Some(&shader));
            Err(SurfaceError::Compile(log))
        }
    }

    fn link(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, SurfaceError> {
        let program = gl
            .create_program()
            .ok_or(SurfaceError::Allocation("program"))?;
        gl.attach_shader(&program, vertex);
        gl.attach_shader(&program, fragment);
        gl.link_program(&program);

        let ok = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(program)
        } else {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            Err(SurfaceError::Link(log))
        }
    }

    impl ShaderSurface {
        pub fn new(canvas: HtmlCanvasElement, fragment_src: &str) -> Result<Self, SurfaceError> {
            let gl: GL = canvas
                .get_context("webgl2")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into().ok())
                .ok_or(SurfaceError::ContextUnavailable)?;

            let vertex = compile(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
            let fragment = compile(&gl, GL::FRAGMENT_SHADER, fragment_src)?;
            let program = link(&gl, &vertex, &fragment);
            // Shaders are owned by the program once linked
            gl.delete_shader(Some(&vertex));
            gl.delete_shader(Some(&fragment));
            let program = program?;

            let vao = gl
                .create_vertex_array()
                .ok_or(SurfaceError::Allocation("vertex array"))?;
            let buffer = gl
                .create_buffer()
                .ok_or(SurfaceError::Allocation("buffer"))?;

            gl.bind_vertex_array(Some(&vao));
            gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
            let vertices = js_sys::Float32Array::from(QUAD.as_slice());
            gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

            let location = gl.get_attrib_location(&program, "aPosition");
            if location >= 0 {
                let location = location as u32;
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_with_i32(location, 2, GL::FLOAT, false, 0, 0);
            }
            gl.bind_vertex_array(None);

            gl.enable(GL::BLEND);
            gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
            gl.clear_color(0.0, 0.0, 0.0, 0.0);

            let mut surface = Self {
                canvas,
                gl,
                program,
                vao,
                buffer,
                resolution: Resolution::from_viewport(1.0, 1.0, 1.0),
            };
            surface.fit_to_canvas();
            Ok(surface)
        }

        pub fn resolution(&self) -> &Resolution {
            &self.resolution
        }

        /// Re-derive the drawing buffer from the canvas' CSS size
        pub fn fit_to_canvas(&mut self) {
            let ratio = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let resolution = Resolution::from_viewport(
                self.canvas.client_width() as f64,
                self.canvas.client_height() as f64,
                ratio,
            );
            self.canvas.set_width(resolution.buffer_width);
            self.canvas.set_height(resolution.buffer_height);
            self.gl.viewport(
                0,
                0,
                resolution.buffer_width as i32,
                resolution.buffer_height as i32,
            );
            self.resolution = resolution;
        }

        pub fn use_program(&self) {
            self.gl.use_program(Some(&self.program));
        }

        pub fn set_f32(&self, name: &str, value: f32) {
            let location = self.gl.get_uniform_location(&self.program, name);
            self.gl.uniform1f(location.as_ref(), value);
        }

        pub fn set_vec2(&self, name: &str, value: [f32; 2]) {
            let location = self.gl.get_uniform_location(&self.program, name);
            self.gl.uniform2f(location.as_ref(), value[0], value[1]);
        }

        pub fn set_vec3(&self, name: &str, value: [f32; 3]) {
            let location = self.gl.get_uniform_location(&self.program, name);
            self.gl.uniform3f(location.as_ref(), value[0], value[1], value[2]);
        }

        pub fn draw(&self) {
            self.gl.clear(GL::COLOR_BUFFER_BIT);
            self.gl.bind_vertex_array(Some(&self.vao));
            self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
            self.gl.bind_vertex_array(None);
        }

        fn dispose(&self) {
            self.gl.delete_buffer(Some(&self.buffer));
            self.gl.delete_vertex_array(Some(&self.vao));
            self.gl.delete_program(Some(&self.program));
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    struct RafInner {
        schedule: RefCell<FrameSchedule>,
        closure: RefCell<Option<Closure<dyn FnMut()>>>,
        on_stop: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    impl RafInner {
        fn request(&self) {
            if !self.schedule.borrow().is_running() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(cb) = self.closure.borrow().as_ref()
                && let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
            {
                self.schedule.borrow_mut().scheduled(id);
            }
        }
    }

    /// A running animation-frame loop. Stops and frees its closure when
    /// dropped.
    pub struct RafLoop {
        inner: Rc<RafInner>,
    }

    impl RafLoop {
        fn set_on_stop(&self, on_stop: impl FnOnce() + 'static) {
            *self.inner.on_stop.borrow_mut() = Some(Box::new(on_stop));
        }

        /// Cancel the pending frame and run the stop hook once
        pub fn stop(&self) {
            let pending = self.inner.schedule.borrow_mut().stop();
            if let (Some(id), Some(window)) = (pending, web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
            let on_stop = self.inner.on_stop.borrow_mut().take();
            if let Some(on_stop) = on_stop {
                on_stop();
            }
        }
    }

    impl Drop for RafLoop {
        fn drop(&mut self) {
            self.stop();
            // Frees the JS closure and everything the frame callback captured
            self.inner.closure.borrow_mut().take();
        }
    }

    /// Call `frame` every animation frame until the returned loop is stopped
    /// or dropped.
    pub fn animate<F>(mut frame: F) -> RafLoop
    where
        F: FnMut(FrameInfo) + 'static,
    {
        let inner = Rc::new(RafInner {
            schedule: RefCell::new(FrameSchedule::default()),
            closure: RefCell::new(None),
            on_stop: RefCell::new(None),
        });

        // The closure only holds a weak reference, so dropping the loop frees it
        let weak: Weak<RafInner> = Rc::downgrade(&inner);
        let mut last = now_ms();
        *inner.closure.borrow_mut() = Some(Closure::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.schedule.borrow_mut().fired() {
                return;
            }

            let now = now_ms();
            let info = FrameInfo {
                time: now / 1000.0,
                dt: frame_delta(now, last),
            };
            last = now;

            frame(info);
            inner.request();
        }));

        inner.request();
        RafLoop { inner }
    }

    /// Drive `surface` every animation frame until the returned loop is
    /// dropped.
    ///
    /// `frame` sets per-frame uniforms; the surface is drawn afterwards. GL
    /// objects are deleted when the loop stops.
    pub fn run_loop<F>(surface: ShaderSurface, resize: ResizeFlag, mut frame: F) -> RafLoop
    where
        F: FnMut(&ShaderSurface, FrameInfo) + 'static,
    {
        let surface = Rc::new(RefCell::new(surface));
        let drawing = surface.clone();

        let raf = animate(move |info| {
            let mut surface = drawing.borrow_mut();
            if resize.take() {
                surface.fit_to_canvas();
            }
            surface.use_program();
            frame(&surface, info);
            surface.draw();
        });
        raf.set_on_stop(move || surface.borrow().dispose());
        raf
    }
}
