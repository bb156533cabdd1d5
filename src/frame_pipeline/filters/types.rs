//! Filter configuration types

/// Processing options for a single pipeline invocation.
///
/// Options toggle individual stages; the execution order of enabled stages
/// is fixed regardless of which are on (see [`stage_plan`](Self::stage_plan)).
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingParams {
    /// Rescale intensities to fill [0,255]
    pub normalize: bool,
    /// Apply fixed-strength noise reduction
    pub denoise: bool,
    /// Intensity gain; 1.0 is identity
    pub gain: f32,
    /// Apply Gaussian blur
    pub gaussian_blur: bool,
    /// Kernel extent for blur (odd number)
    pub blur_kernel_size: usize,
    /// Apply unsharp-mask sharpening
    pub sharpen: bool,
    /// Sharpening strength
    pub sharpen_amount: f32,
    /// Contrast multiplier; 1.0 is identity
    pub contrast_alpha: f32,
    /// Brightness offset
    pub contrast_beta: i32,
    /// Reserved for future on-device inference; currently inert
    pub enable_ai_preprocessing: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            normalize: true,
            denoise: true,
            gain: 1.0,
            gaussian_blur: false,
            blur_kernel_size: 3,
            sharpen: false,
            sharpen_amount: 1.0,
            contrast_alpha: 1.0,
            contrast_beta: 0,
            enable_ai_preprocessing: false,
        }
    }
}

impl ProcessingParams {
    pub fn builder() -> ProcessingParamsBuilder {
        ProcessingParamsBuilder::default()
    }

    /// A blur kernel must have a positive, odd extent.
    pub fn blur_kernel_valid(&self) -> bool {
        self.blur_kernel_size > 0 && self.blur_kernel_size % 2 == 1
    }

    /// Builds the ordered list of enabled stages for one invocation.
    ///
    /// The relative order never changes; disabled stages are simply absent.
    /// The terminal clamp/rescale is not part of the plan; it always runs.
    pub fn stage_plan(&self) -> Vec<FilterStage> {
        let mut plan = Vec::new();

        if self.normalize {
            plan.push(FilterStage::Normalize);
        }
        if self.gain != 1.0 {
            plan.push(FilterStage::Gain(self.gain));
        }
        if self.denoise {
            plan.push(FilterStage::Denoise);
        }
        if self.gaussian_blur && self.blur_kernel_valid() {
            plan.push(FilterStage::Blur(self.blur_kernel_size));
        }
        if self.sharpen {
            plan.push(FilterStage::Sharpen(self.sharpen_amount));
        }
        if self.contrast_alpha != 1.0 || self.contrast_beta != 0 {
            plan.push(FilterStage::Contrast {
                alpha: self.contrast_alpha,
                beta: self.contrast_beta,
            });
        }

        plan
    }
}

/// One discrete, independently toggled transform in the fixed-order plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterStage {
    Normalize,
    Gain(f32),
    Denoise,
    Blur(usize),
    Sharpen(f32),
    Contrast { alpha: f32, beta: i32 },
}

impl FilterStage {
    pub fn name(&self) -> &'static str {
        match self {
            FilterStage::Normalize => "normalize",
            FilterStage::Gain(_) => "gain",
            FilterStage::Denoise => "denoise",
            FilterStage::Blur(_) => "gaussian_blur",
            FilterStage::Sharpen(_) => "sharpen",
            FilterStage::Contrast { .. } => "contrast",
        }
    }
}

/// Builder for ProcessingParams
#[derive(Default)]
pub struct ProcessingParamsBuilder {
    normalize: Option<bool>,
    denoise: Option<bool>,
    gain: Option<f32>,
    gaussian_blur: Option<bool>,
    blur_kernel_size: Option<usize>,
    sharpen: Option<bool>,
    sharpen_amount: Option<f32>,
    contrast_alpha: Option<f32>,
    contrast_beta: Option<i32>,
    enable_ai_preprocessing: Option<bool>,
}

impl ProcessingParamsBuilder {
    pub fn normalize(mut self, enable: bool) -> Self {
        self.normalize = Some(enable);
        self
    }

    pub fn denoise(mut self, enable: bool) -> Self {
        self.denoise = Some(enable);
        self
    }

    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = Some(gain);
        self
    }

    pub fn gaussian_blur(mut self, enable: bool) -> Self {
        self.gaussian_blur = Some(enable);
        self
    }

    pub fn blur_kernel_size(mut self, size: usize) -> Self {
        self.blur_kernel_size = Some(size);
        self
    }

    pub fn sharpen(mut self, enable: bool) -> Self {
        self.sharpen = Some(enable);
        self
    }

    pub fn sharpen_amount(mut self, amount: f32) -> Self {
        self.sharpen_amount = Some(amount);
        self
    }

    pub fn contrast_alpha(mut self, alpha: f32) -> Self {
        self.contrast_alpha = Some(alpha);
        self
    }

    pub fn contrast_beta(mut self, beta: i32) -> Self {
        self.contrast_beta = Some(beta);
        self
    }

    pub fn enable_ai_preprocessing(mut self, enable: bool) -> Self {
        self.enable_ai_preprocessing = Some(enable);
        self
    }

    pub fn build(self) -> ProcessingParams {
        let default = ProcessingParams::default();
        ProcessingParams {
            normalize: self.normalize.unwrap_or(default.normalize),
            denoise: self.denoise.unwrap_or(default.denoise),
            gain: self.gain.unwrap_or(default.gain),
            gaussian_blur: self.gaussian_blur.unwrap_or(default.gaussian_blur),
            blur_kernel_size: self.blur_kernel_size.unwrap_or(default.blur_kernel_size),
            sharpen: self.sharpen.unwrap_or(default.sharpen),
            sharpen_amount: self.sharpen_amount.unwrap_or(default.sharpen_amount),
            contrast_alpha: self.contrast_alpha.unwrap_or(default.contrast_alpha),
            contrast_beta: self.contrast_beta.unwrap_or(default.contrast_beta),
            enable_ai_preprocessing: self
                .enable_ai_preprocessing
                .unwrap_or(default.enable_ai_preprocessing),
        }
    }
}
