//! Lua 5.4 adapter for the scripting seam, backed by mlua

use std::cell::RefCell;
use std::rc::Rc;

use mlua::{Function, Lua, RegistryKey, Value, Variadic};

use super::{CallbackId, ScriptEngine, ScriptError, ScriptOutcome, ScriptRequest, LINE_GLOBAL};

/// Request as queued from inside Lua, before callbacks get ids
enum Queued {
    Register { name: String, key: RegistryKey },
    Invoke { name: String, args: Vec<String> },
    Print(String),
}

type Queue = Rc<RefCell<Vec<Queued>>>;

pub struct LuaEngine {
    lua: Lua,
    queue: Queue,
    /// Registry slots of registered callbacks, indexed by `CallbackId`
    callbacks: Vec<RegistryKey>,
}

impl LuaEngine {
    pub fn new() -> Result<Self, ScriptError> {
        let lua = Lua::new();
        let queue: Queue = Rc::new(RefCell::new(Vec::new()));
        install_api(&lua, &queue)?;
        lua.globals().set(LINE_GLOBAL, 0)?;

        Ok(Self {
            lua,
            queue,
            callbacks: Vec::new(),
        })
    }

    /// Turn queued requests into outcome requests, taking ownership of
    /// newly registered callbacks
    fn drain(&mut self) -> Vec<ScriptRequest> {
        let queued = std::mem::take(&mut *self.queue.borrow_mut());
        queued
            .into_iter()
            .map(|request| match request {
                Queued::Register { name, key } => {
                    self.callbacks.push(key);
                    let callback = CallbackId(self.callbacks.len() - 1);
                    tracing::debug!("Script registered command {:?} as {:?}", name, callback);
                    ScriptRequest::Register { name, callback }
                }
                Queued::Invoke { name, args } => ScriptRequest::Invoke { name, args },
                Queued::Print(text) => ScriptRequest::Print(text),
            })
            .collect()
    }

    /// Drop whatever a failed chunk queued before raising
    fn discard(&mut self) {
        let dropped = std::mem::take(&mut *self.queue.borrow_mut());
        if !dropped.is_empty() {
            tracing::debug!("Discarding {} requests from failed script", dropped.len());
        }
    }

    fn render(&self, value: Value) -> Result<Option<String>, ScriptError> {
        if value.is_nil() {
            return Ok(None);
        }
        let tostring: Function = self.lua.globals().get("tostring")?;
        Ok(Some(tostring.call::<String>(value)?))
    }
}

impl ScriptEngine for LuaEngine {
    fn name(&self) -> &'static str {
        "lua"
    }

    fn eval(&mut self, source: &str) -> Result<ScriptOutcome, ScriptError> {
        let result = self.lua.load(source).set_name("runjs").eval::<Value>();
        let value = match result {
            Ok(value) => value,
            Err(e) => {
                self.discard();
                return Err(e.into());
            }
        };
        let value = self.render(value)?;
        Ok(ScriptOutcome {
            value,
            requests: self.drain(),
        })
    }

    fn call(&mut self, callback: CallbackId, input: &str) -> Result<ScriptOutcome, ScriptError> {
        let key = self
            .callbacks
            .get(callback.0)
            .ok_or_else(|| ScriptError::new(format!("no such callback: {}", callback.0)))?;
        let function: Function = self.lua.registry_value(key)?;

        let called = function.call::<Value>(input);
        let result = match called {
            Ok(result) => result,
            Err(e) => {
                self.discard();
                return Err(e.into());
            }
        };
        if let Value::Boolean(false) = result {
            self.discard();
            return Err(ScriptError::new("command callback reported failure"));
        }

        Ok(ScriptOutcome {
            value: None,
            requests: self.drain(),
        })
    }

    fn publish_line(&mut self, line: usize) {
        if let Err(e) = self.lua.globals().set(LINE_GLOBAL, line) {
            tracing::warn!("Failed to publish cursor to scripts: {}", e);
        }
    }
}

fn install_api(lua: &Lua, queue: &Queue) -> Result<(), ScriptError> {
    let globals = lua.globals();

    let q = Rc::clone(queue);
    let register = lua.create_function(move |lua, (name, callback): (String, Function)| {
        let key = lua.create_registry_value(callback)?;
        q.borrow_mut().push(Queued::Register { name, key });
        Ok(())
    })?;
    globals.set("register", register)?;

    let q = Rc::clone(queue);
    let invoke = lua.create_function(move |_, (name, args): (String, Variadic<String>)| {
        q.borrow_mut().push(Queued::Invoke {
            name,
            args: args.into_iter().collect(),
        });
        Ok(())
    })?;
    globals.set("invoke", invoke)?;

    let q = Rc::clone(queue);
    let print = lua.create_function(move |lua, values: Variadic<Value>| {
        let tostring: Function = lua.globals().get("tostring")?;
        let parts = values
            .into_iter()
            .map(|v| tostring.call::<String>(v))
            .collect::<mlua::Result<Vec<_>>>()?;
        q.borrow_mut().push(Queued::Print(parts.join("\t")));
        Ok(())
    })?;
    globals.set("print", print)?;

    Ok(())
}

impl From<mlua::Error> for ScriptError {
    fn from(e: mlua::Error) -> Self {
        ScriptError(e.to_string())
    }
}
