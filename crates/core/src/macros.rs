// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the cluster config types.

/// Builder-style setters, expanded inside an existing `impl` block.
///
/// Each group is optional but they must appear in this order:
/// - `into`: the setter accepts `impl Into<Type>`
/// - `set`: the setter takes `Type` as is
/// - `option`: the field is `Option<Type>` and the setter stores `Some(v.into())`
///
/// ```ignore
/// impl AgentConfig {
///     mm_core::setters! {
///         into { resources: String, master: String }
///         set { settings: AgentSettings }
///         option { master_address: String }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into {
            $( $into_field:ident : $into_ty:ty ),* $(,)?
        })?
        $(set {
            $( $set_field:ident : $set_ty:ty ),* $(,)?
        })?
        $(option {
            $( $opt_field:ident : $opt_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $into_field(mut self, value: impl Into<$into_ty>) -> Self {
                self.$into_field = value.into();
                self
            }
        )*)?

        $($(
            pub fn $set_field(mut self, value: $set_ty) -> Self {
                self.$set_field = value;
                self
            }
        )*)?

        $($(
            pub fn $opt_field(mut self, value: impl Into<$opt_ty>) -> Self {
                self.$opt_field = Some(value.into());
                self
            }
        )*)?
    };
}
