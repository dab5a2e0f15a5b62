//! Static guidance blocks embedded into the analysis prompt.

use crate::topic::Topic;

pub const GENERIC_LANGUAGE_GUIDANCE: &str = "Apply general game development best practices.";

const PERFORMANCE: &str = "\
Performance Optimization Focus:
1. Game Loop Optimization
   - Fixed timestep implementation
   - Variable timestep handling
   - Frame timing and synchronization
   - Delta time calculations
   - Frame rate limiting and VSync

2. Memory Management
   - Object pooling systems
   - Resource caching
   - Memory defragmentation
   - Garbage collection optimization
   - Asset streaming

3. Rendering Optimization
   - Batch rendering systems
   - Culling techniques (frustum, occlusion)
   - LOD (Level of Detail) systems
   - Texture atlasing
   - Shader optimization
   - Draw call reduction

4. Physics Optimization
   - Broad phase collision detection
   - Spatial partitioning (Quadtree, Octree)
   - Physics engine optimization
   - Collision response optimization
   - Rigidbody management";

const GAMEPLAY: &str = "\
Gameplay Systems Focus:
1. Input Systems
   - Input mapping and configuration
   - Input buffering and prediction
   - Gesture recognition
   - Input state management
   - Controller support

2. Combat Systems
   - Hit detection and hitboxes
   - Damage calculation systems
   - Combat state machines
   - Combo systems
   - Projectile management

3. AI Systems
   - Pathfinding (A*, Dijkstra)
   - Behavior trees
   - State machines for AI
   - Decision making systems
   - Group behavior coordination
   - Navigation mesh usage

4. Game Mechanics
   - Power-up systems
   - Inventory management
   - Quest/Mission systems
   - Achievement systems
   - Progression systems
   - Economy systems";

const ARCHITECTURE: &str = "\
Game Architecture Focus:
1. Core Systems
   - Entity Component System (ECS)
   - Event/Message systems
   - Service locator pattern
   - Dependency injection
   - Scene graph management

2. Data Management
   - Save/Load systems
   - Serialization
   - Data persistence
   - Configuration management
   - Asset management

3. Game State
   - State machine implementation
   - Scene management
   - Level loading systems
   - Checkpoint systems
   - Game flow control

4. Networking
   - Client-server architecture
   - State synchronization
   - Network prediction
   - Lag compensation
   - Multiplayer session management";

const GRAPHICS: &str = "\
Graphics Systems Focus:
1. Rendering Pipeline
   - Custom shaders
   - Post-processing effects
   - Particle systems
   - Animation systems
   - Camera systems

2. Visual Effects
   - Sprite management
   - Special effects systems
   - Weather systems
   - Lighting systems
   - Shadow techniques

3. UI/UX
   - HUD systems
   - Menu systems
   - UI animation
   - Screen space effects
   - UI state management

4. Asset Pipeline
   - Texture management
   - Model loading
   - Animation data
   - Asset bundling
   - Resource streaming";

const AUDIO: &str = "\
Audio Systems Focus:
1. Sound Engine
   - Audio source management
   - 3D positional audio
   - Sound mixing
   - Audio effects processing
   - Stream management

2. Music Systems
   - Dynamic music system
   - Music state management
   - Transition systems
   - Adaptive music
   - Playlist management

3. Sound Effects
   - SFX pooling
   - Priority system
   - Distance-based attenuation
   - Environmental effects
   - Real-time effects";

const TOOLS: &str = "\
Game Development Tools Focus:
1. Debug Systems
   - Performance profiling
   - Debug visualization
   - Logging systems
   - State inspection
   - Replay systems

2. Level Tools
   - Level editor integration
   - Tile system management
   - Procedural generation
   - Environment systems
   - Spawn point management

3. Testing
   - Unit testing framework
   - Integration testing
   - Automated testing
   - Replay testing
   - Performance testing";

const JAVA: &str = "\
Java Game Development Best Practices:
1. Game Engine Integration
   - LibGDX optimization patterns
   - LWJGL best practices
   - JavaFX game loop patterns
   - JMonkey engine patterns
   - Custom game loop implementation

2. Performance Patterns
   - Efficient collection usage (ArrayDeque for game objects)
   - Object pooling implementation
   - Garbage collection optimization
   - Thread management for game loops
   - Double/Triple buffering patterns

3. Architecture Patterns
   - Entity Component System (ECS)
   - Game state management
   - Scene graph implementation
   - Event handling system
   - Asset management patterns
   - Resource loading optimization

4. Game Systems
   - Collision detection optimization
   - Physics engine integration
   - Sprite batch rendering
   - Animation system patterns
   - Input handling system
   - Sound system management";

const PYTHON: &str = "\
Python Game Development Best Practices:
1. Pygame Optimization
   - Surface caching
   - Sprite group optimization
   - Rect collision optimization
   - Event handling patterns
   - Sound management

2. Performance Patterns
   - NumPy for physics calculations
   - Cython for critical paths
   - Proper surface locking
   - Efficient sprite management
   - Resource loading optimization

3. Architecture
   - Scene management system
   - State machine implementation
   - Event system patterns
   - Component-based design
   - Resource management";

const JAVASCRIPT: &str = "\
JavaScript Game Development Best Practices:
1. Canvas Optimization
   - RequestAnimationFrame usage
   - Double buffering
   - Canvas state management
   - Sprite batching
   - Layer management

2. WebGL Integration
   - Shader management
   - Buffer optimization
   - Texture handling
   - WebGL state caching
   - Render queue management

3. Browser Optimization
   - Asset preloading
   - Web Worker utilization
   - Memory management
   - Event delegation
   - Resource caching";

const TYPESCRIPT: &str = "\
TypeScript Game Development Best Practices:
1. Type Safety
   - Game state interfaces
   - Entity type definitions
   - Component type safety
   - Event type definitions
   - Asset type management

2. Architecture Patterns
   - Dependency injection
   - Service decorators
   - Module organization
   - Generic constraints
   - Abstract factories

3. Engine Integration
   - Engine type definitions
   - Plugin type safety
   - Framework integration
   - Module augmentation
   - Declaration merging";

const CPP: &str = "\
C++ Game Development Best Practices:
1. Memory Management
   - Custom allocators
   - Memory pools
   - RAII patterns
   - Smart pointer usage
   - Memory alignment

2. Performance
   - SIMD optimization
   - Cache coherency
   - Data-oriented design
   - Template metaprogramming
   - Compiler optimization

3. Engine Systems
   - Component systems
   - Memory managers
   - Resource handling
   - Threading patterns
   - Platform abstraction";

const CSHARP: &str = "\
C# Game Development Best Practices:
1. Unity Integration
   - MonoBehaviour patterns
   - Coroutine optimization
   - Scriptable Objects
   - Custom editors
   - Asset management

2. Performance
   - Struct optimization
   - Job system usage
   - Burst compilation
   - Memory management
   - Unity DOTS

3. Architecture
   - Component patterns
   - Event systems
   - Service locator
   - Object pooling
   - Scene management";

pub fn topic_guidance(topic: Topic) -> &'static str {
    match topic {
        Topic::Performance => PERFORMANCE,
        Topic::Gameplay => GAMEPLAY,
        Topic::Architecture => ARCHITECTURE,
        Topic::Graphics => GRAPHICS,
        Topic::Audio => AUDIO,
        Topic::Tools => TOOLS,
    }
}

/// Best-practice block for a language key, looked up case-insensitively.
pub fn language_guidance(language: &str) -> Option<&'static str> {
    match language.to_ascii_lowercase().as_str() {
        "java" => Some(JAVA),
        "python" => Some(PYTHON),
        "javascript" => Some(JAVASCRIPT),
        "typescript" => Some(TYPESCRIPT),
        "cpp" => Some(CPP),
        "csharp" => Some(CSHARP),
        _ => None,
    }
}
